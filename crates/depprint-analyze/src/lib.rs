//! Dependency set building for depprint.
//!
//! This crate turns the flat, pre-resolved artifact collection of a project
//! into the ordered list of compile dependencies to print:
//!
//! - **Artifact sources** - [`ArtifactSource`] supplies the resolved graph;
//!   [`JsonManifest`] reads it from a JSON file or stdin
//! - **Dependency set** - [`DependencySetBuilder`] orders by
//!   `(group id, artifact id)`, keeps the first record per key, drops
//!   non-compile scopes and applies the project/external inclusion toggles
//!
//! ```rust,no_run
//! use depprint_analyze::{ArtifactSource, DependencyFilter, DependencySetBuilder, JsonManifest};
//! use depprint_core::PrintConfig;
//!
//! let config = PrintConfig::default();
//! let artifacts = JsonManifest::new("artifacts.json").artifacts().unwrap();
//!
//! let builder = DependencySetBuilder::with_filter(DependencyFilter::from(&config));
//! let report = builder.build(artifacts);
//!
//! for line in report.lines(&config) {
//!     println!("{line}");
//! }
//! ```

mod dependencies;
mod manifest;

pub use dependencies::{
    DependencyFilter, DependencyFilterBuilder, DependencyFilterBuilderError, DependencyReport,
    DependencySetBuilder, Ownership,
};
pub use manifest::{ArtifactSource, JsonManifest, STDIN_PATH};

// Re-export core types
pub use depprint_core::{ArtifactRecord, PrintConfig, ReportError};
