//! Compile dependency set building.
//!
//! The builder runs a fixed pipeline over the host's artifact collection:
//! 1. Order by (group id, artifact id), keeping the first record per key
//! 2. Drop every artifact whose scope is not exactly `compile`
//! 3. Classify survivors as project-owned or external
//! 4. Drop the classes the configuration excludes

use std::collections::BTreeSet;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use depprint_core::{ArtifactRecord, KeyedSet, LineFormatter, PrintConfig};

/// Which inclusion toggle governs an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    /// Group id is one of the project's own.
    Project,
    /// Everything else.
    External,
}

/// Configuration for dependency filtering.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct DependencyFilter {
    /// Keep external artifacts.
    #[builder(default = "true")]
    pub include_dependencies: bool,

    /// Keep project-owned artifacts.
    #[builder(default = "true")]
    pub include_project_artifacts: bool,

    /// Group ids considered project-owned.
    #[builder(default)]
    pub project_group_ids: BTreeSet<String>,
}

impl Default for DependencyFilter {
    fn default() -> Self {
        Self {
            include_dependencies: true,
            include_project_artifacts: true,
            project_group_ids: BTreeSet::new(),
        }
    }
}

impl DependencyFilter {
    /// Create a new filter builder.
    pub fn builder() -> DependencyFilterBuilder {
        DependencyFilterBuilder::default()
    }

    /// Classify an artifact by its group id.
    pub fn ownership(&self, artifact: &ArtifactRecord) -> Ownership {
        if self.project_group_ids.contains(artifact.group_id.as_str()) {
            Ownership::Project
        } else {
            Ownership::External
        }
    }

    /// Check if an artifact of the given ownership is kept.
    pub fn includes(&self, ownership: Ownership) -> bool {
        match ownership {
            Ownership::Project => self.include_project_artifacts,
            Ownership::External => self.include_dependencies,
        }
    }
}

impl From<&PrintConfig> for DependencyFilter {
    fn from(config: &PrintConfig) -> Self {
        Self {
            include_dependencies: config.include_dependencies,
            include_project_artifacts: config.include_project_artifacts,
            project_group_ids: config.project_group_ids.clone(),
        }
    }
}

/// Result of building a dependency set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyReport {
    /// Artifacts to print, ascending by (group id, artifact id).
    pub artifacts: Vec<ArtifactRecord>,

    /// Number of artifacts handed in.
    pub input_count: usize,

    /// Records dropped because an earlier record had the same key.
    pub duplicates_dropped: usize,

    /// Unique records whose scope was `compile`.
    pub compile_count: usize,

    /// Compile records dropped as project-owned.
    pub project_dropped: usize,

    /// Compile records dropped as external.
    pub external_dropped: usize,
}

impl DependencyReport {
    /// Check if nothing is left to print.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Format the surviving artifacts, in order.
    pub fn lines(&self, config: &PrintConfig) -> Vec<String> {
        if config.verbose {
            tracing::info!("{} compile dependencies found:", self.compile_count);
        }

        let formatter = LineFormatter::new(config);
        self.artifacts
            .iter()
            .map(|artifact| {
                if config.verbose {
                    tracing::info!(
                        "- {}:{}:{} ({}) from repository '{}'",
                        artifact.group_id,
                        artifact.artifact_id,
                        artifact.version,
                        artifact.artifact_type,
                        artifact.repository_url().unwrap_or("none")
                    );
                }
                formatter.format_artifact(artifact)
            })
            .collect()
    }
}

/// Builds the ordered, filtered dependency set of a project.
pub struct DependencySetBuilder {
    filter: DependencyFilter,
}

impl DependencySetBuilder {
    /// Create a builder that keeps every compile artifact.
    pub fn new() -> Self {
        Self {
            filter: DependencyFilter::default(),
        }
    }

    /// Create a builder with a custom filter.
    pub fn with_filter(filter: DependencyFilter) -> Self {
        Self { filter }
    }

    /// The filter in use.
    pub fn filter(&self) -> &DependencyFilter {
        &self.filter
    }

    /// Run the pipeline over a flat artifact collection.
    pub fn build(&self, artifacts: impl IntoIterator<Item = ArtifactRecord>) -> DependencyReport {
        let mut input_count = 0;
        let mut set = KeyedSet::new();
        for artifact in artifacts {
            input_count += 1;
            set.insert(artifact);
        }
        let duplicates_dropped = input_count - set.len();

        set.retain(ArtifactRecord::is_compile);
        let compile_count = set.len();

        let mut project_dropped = 0;
        let mut external_dropped = 0;
        set.retain(|artifact| {
            let ownership = self.filter.ownership(artifact);
            let keep = self.filter.includes(ownership);
            if !keep {
                match ownership {
                    Ownership::Project => project_dropped += 1,
                    Ownership::External => external_dropped += 1,
                }
            }
            keep
        });

        DependencyReport {
            artifacts: set.into_vec(),
            input_count,
            duplicates_dropped,
            compile_count,
            project_dropped,
            external_dropped,
        }
    }
}

impl Default for DependencySetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
