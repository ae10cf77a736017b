//! Core types for depprint.
//!
//! This crate provides the data structures shared by the module scanner and
//! the dependency analyzer: records and their coordinate keys, the ordered
//! key-deduplicated set, report configuration, line formatting and the
//! report writer.

mod config;
mod error;
mod format;
mod output;
mod record;
mod set;
mod tree;

pub use config::{
    DEFAULT_OUTPUT_DIRECTORY, DEFAULT_OUTPUT_FILE_NAME, PrintConfig, PrintConfigBuilder,
    PrintConfigBuilderError,
};
pub use error::ReportError;
pub use format::{FIELD_SEPARATOR, LineFormatter};
pub use output::{write_lines, write_report};
pub use record::{
    ArtifactRecord, COMPILE_SCOPE, CoordinateKey, Inherited, Keyed, ModuleRecord,
};
pub use set::KeyedSet;
pub use tree::{ModuleTree, ScanStats};
