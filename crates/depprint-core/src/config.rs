//! Report configuration types.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Default name of the report file.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "dependency-print-output.txt";

/// Default directory the report file is written into.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "target/classes";

/// Configuration for a single report run.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PrintConfig {
    /// Include external (non project-owned) artifacts in dependency reports.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_dependencies: bool,

    /// Include project-owned artifacts in dependency reports.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_project_artifacts: bool,

    /// Print the artifact type.
    #[builder(default = "false")]
    #[serde(default)]
    pub print_type: bool,

    /// Print the module packaging.
    #[builder(default = "false")]
    #[serde(default)]
    pub print_packaging: bool,

    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub print_group_id: bool,

    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub print_artifact_id: bool,

    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub print_version: bool,

    /// Append ` from <url>` when an artifact carries a repository URL.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub print_repository_url: bool,

    /// Group ids that belong to the project itself.
    #[builder(default)]
    #[serde(default)]
    pub project_group_ids: BTreeSet<String>,

    /// Directory the report is written into.
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_DIRECTORY)")]
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// File name of the report inside `output_directory`.
    #[builder(default = "DEFAULT_OUTPUT_FILE_NAME.to_string()")]
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// Emit per-record diagnostics.
    #[builder(default = "false")]
    #[serde(default)]
    pub verbose: bool,
}

fn default_true() -> bool {
    true
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIRECTORY)
}

fn default_output_file_name() -> String {
    DEFAULT_OUTPUT_FILE_NAME.to_string()
}

fn validate_file_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Output file name cannot be empty".to_string());
    }
    if name.contains('/') || name.contains('\\') {
        return Err(format!("Output file name must not contain a path separator: {name}"));
    }
    Ok(())
}

impl PrintConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref name) = self.output_file_name {
            validate_file_name(name)?;
        }
        Ok(())
    }
}

impl PrintConfig {
    /// Create a new config builder.
    pub fn builder() -> PrintConfigBuilder {
        PrintConfigBuilder::default()
    }

    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ReportError> {
        let config: Self = toml::from_str(text).map_err(|e| ReportError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check a config that was assembled field by field.
    pub fn validate(&self) -> Result<(), ReportError> {
        validate_file_name(&self.output_file_name)
            .map_err(|message| ReportError::InvalidConfig { message })
    }

    /// Load a config from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Full path of the report file.
    pub fn output_path(&self) -> PathBuf {
        self.output_directory.join(&self.output_file_name)
    }

    /// Check if a group id is owned by the project.
    pub fn is_project_group(&self, group_id: &str) -> bool {
        self.project_group_ids.contains(group_id)
    }

    /// Check if every field toggle is off, which makes each line empty.
    pub fn prints_nothing(&self) -> bool {
        !(self.print_group_id
            || self.print_artifact_id
            || self.print_version
            || self.print_type
            || self.print_packaging
            || self.print_repository_url)
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            include_dependencies: true,
            include_project_artifacts: true,
            print_type: false,
            print_packaging: false,
            print_group_id: true,
            print_artifact_id: true,
            print_version: true,
            print_repository_url: true,
            project_group_ids: BTreeSet::new(),
            output_directory: default_output_directory(),
            output_file_name: default_output_file_name(),
            verbose: false,
        }
    }
}
