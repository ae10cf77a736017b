//! Module and artifact record types.

use std::fmt;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Scope name of the only dependencies eligible for a report.
pub const COMPILE_SCOPE: &str = "compile";

/// Identity of a record for ordering and deduplication.
///
/// Only `(group_id, artifact_id)` take part; version, packaging, type and
/// repository are left out. Ordering is lexicographic by group
/// then artifact, which the derived `Ord` gives us from field order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoordinateKey {
    pub group_id: CompactString,
    pub artifact_id: CompactString,
}

impl CoordinateKey {
    /// Create a new key.
    pub fn new(group_id: impl Into<CompactString>, artifact_id: impl Into<CompactString>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Anything that can be placed in a [`KeyedSet`](crate::KeyedSet).
pub trait Keyed {
    /// The record's identity.
    fn key(&self) -> CoordinateKey;
}

/// Attributes a module passes down to its submodules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inherited {
    pub group_id: CompactString,
    pub version: CompactString,
}

impl Inherited {
    /// Create a new inherited context.
    pub fn new(group_id: impl Into<CompactString>, version: impl Into<CompactString>) -> Self {
        Self {
            group_id: group_id.into(),
            version: version.into(),
        }
    }
}

/// A single node of a project's module tree, with coordinates resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Group id (own or inherited).
    pub group_id: CompactString,

    /// Artifact id, never inherited.
    pub artifact_id: CompactString,

    /// Version (own or inherited).
    pub version: CompactString,

    /// Packaging, never inherited.
    pub packaging: CompactString,

    /// Directory holding the module's descriptor.
    pub root: PathBuf,
}

impl ModuleRecord {
    /// Create a new module record.
    pub fn new(
        group_id: impl Into<CompactString>,
        artifact_id: impl Into<CompactString>,
        version: impl Into<CompactString>,
        packaging: impl Into<CompactString>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            packaging: packaging.into(),
            root: root.into(),
        }
    }

    /// The context this module hands to its own submodules.
    pub fn inherited(&self) -> Inherited {
        Inherited {
            group_id: self.group_id.clone(),
            version: self.version.clone(),
        }
    }

    /// Directory holding the module's descriptor.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Keyed for ModuleRecord {
    fn key(&self) -> CoordinateKey {
        CoordinateKey::new(self.group_id.clone(), self.artifact_id.clone())
    }
}

/// A resolved dependency as handed over by the build host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    pub group_id: CompactString,

    pub artifact_id: CompactString,

    pub version: CompactString,

    /// Artifact type (`jar`, `pom`, `war`, ...).
    #[serde(rename = "type", default = "default_type")]
    pub artifact_type: CompactString,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<CompactString>,

    /// Dependency scope; only `compile` survives filtering.
    #[serde(default = "default_scope")]
    pub scope: CompactString,

    /// URL of the repository the artifact was resolved from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
}

fn default_type() -> CompactString {
    CompactString::const_new("jar")
}

fn default_scope() -> CompactString {
    CompactString::const_new(COMPILE_SCOPE)
}

impl ArtifactRecord {
    /// Create a `jar` artifact with no repository.
    pub fn new(
        group_id: impl Into<CompactString>,
        artifact_id: impl Into<CompactString>,
        version: impl Into<CompactString>,
        scope: impl Into<CompactString>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            artifact_type: default_type(),
            classifier: None,
            scope: scope.into(),
            repository_url: None,
        }
    }

    /// Set the artifact type.
    pub fn with_type(mut self, artifact_type: impl Into<CompactString>) -> Self {
        self.artifact_type = artifact_type.into();
        self
    }

    /// Set the source repository URL.
    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = Some(url.into());
        self
    }

    /// Whether the scope is exactly `compile`.
    pub fn is_compile(&self) -> bool {
        self.scope == COMPILE_SCOPE
    }

    /// Repository URL, if present and non-empty.
    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref().filter(|url| !url.is_empty())
    }
}

impl Keyed for ArtifactRecord {
    fn key(&self) -> CoordinateKey {
        CoordinateKey::new(self.group_id.clone(), self.artifact_id.clone())
    }
}
