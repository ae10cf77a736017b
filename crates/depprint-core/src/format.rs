//! Rendering records into report lines.

use crate::config::PrintConfig;
use crate::record::{ArtifactRecord, ModuleRecord};

/// Separator placed between two printed fields.
pub const FIELD_SEPARATOR: char = ':';

/// Renders one record into one line according to the print toggles.
///
/// Fields are always emitted in the order group id, artifact id, version,
/// then type (artifacts) or packaging (modules). Disabled fields leave no
/// trace, including their separator, so a configuration with every toggle
/// off produces empty lines.
#[derive(Debug, Clone, Copy)]
pub struct LineFormatter<'a> {
    config: &'a PrintConfig,
}

impl<'a> LineFormatter<'a> {
    /// Create a formatter over a configuration.
    pub fn new(config: &'a PrintConfig) -> Self {
        Self { config }
    }

    /// Format a module record.
    pub fn format_module(&self, module: &ModuleRecord) -> String {
        let c = self.config;
        join_fields([
            (c.print_group_id, module.group_id.as_str()),
            (c.print_artifact_id, module.artifact_id.as_str()),
            (c.print_version, module.version.as_str()),
            (c.print_packaging, module.packaging.as_str()),
        ])
    }

    /// Format an artifact record, including the repository suffix.
    pub fn format_artifact(&self, artifact: &ArtifactRecord) -> String {
        let c = self.config;
        let mut line = join_fields([
            (c.print_group_id, artifact.group_id.as_str()),
            (c.print_artifact_id, artifact.artifact_id.as_str()),
            (c.print_version, artifact.version.as_str()),
            (c.print_type, artifact.artifact_type.as_str()),
        ]);

        if c.print_repository_url {
            if let Some(url) = artifact.repository_url() {
                line.push_str(" from ");
                line.push_str(url);
            }
        }

        line
    }

    /// Format a sequence of modules, preserving order.
    pub fn module_lines<'r>(&self, modules: impl IntoIterator<Item = &'r ModuleRecord>) -> Vec<String> {
        modules.into_iter().map(|m| self.format_module(m)).collect()
    }

    /// Format a sequence of artifacts, preserving order.
    pub fn artifact_lines<'r>(
        &self,
        artifacts: impl IntoIterator<Item = &'r ArtifactRecord>,
    ) -> Vec<String> {
        artifacts.into_iter().map(|a| self.format_artifact(a)).collect()
    }
}

fn join_fields(fields: [(bool, &str); 4]) -> String {
    let mut line = String::new();
    for (enabled, value) in fields {
        if !enabled {
            continue;
        }
        if !line.is_empty() {
            line.push(FIELD_SEPARATOR);
        }
        line.push_str(value);
    }
    line
}
