//! Module tree discovery for depprint.
//!
//! This crate walks a multi-module project from its root descriptor and
//! returns the flattened list of leaf modules.
//!
//! # Overview
//!
//! - **Descriptors** are read through the [`DescriptorLoader`] trait;
//!   [`PomLoader`] reads `pom.xml` files from disk.
//! - **Inheritance**: a module that omits its group id or version takes the
//!   value from its `<parent>` element, else from the enclosing module.
//! - **Leaves only**: modules declaring submodules are walked through but
//!   never reported.
//! - **Quiet stop**: a declared module with no descriptor ends the walk of
//!   that module list without an error. A malformed descriptor is fatal.
//! - **Cycles**: a module declared inside its own directory chain (for
//!   example `<module>.</module>`) fails with [`ReportError::ModuleCycle`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use depprint_scan::{ModuleResolver, PrintConfig, module_lines};
//!
//! let tree = ModuleResolver::new().resolve(Path::new("/path/to/project")).unwrap();
//! for line in module_lines(&tree, &PrintConfig::default()) {
//!     println!("{line}");
//! }
//! ```

mod descriptor;
mod loader;
mod report;
mod resolver;

pub use descriptor::{DEFAULT_PACKAGING, DEFAULT_PARENT_PATH, Descriptor, ParentRef};
pub use loader::{DESCRIPTOR_FILE_NAME, DescriptorLoader, MemoryLoader, PomLoader};
pub use report::module_lines;
pub use resolver::{ModuleResolver, order_leaves};

// Re-export core types for convenience
pub use depprint_core::{
    Inherited, ModuleRecord, ModuleTree, PrintConfig, ReportError, ScanStats,
};
