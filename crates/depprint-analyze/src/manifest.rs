//! Pre-resolved artifact sets handed over by the build host.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use depprint_core::{ArtifactRecord, ReportError};

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Supplier of the resolved compile-graph artifacts of a project.
pub trait ArtifactSource {
    /// Return every artifact of the project's resolved graph.
    fn artifacts(&self) -> Result<Vec<ArtifactRecord>, ReportError>;
}

impl ArtifactSource for Vec<ArtifactRecord> {
    fn artifacts(&self) -> Result<Vec<ArtifactRecord>, ReportError> {
        Ok(self.clone())
    }
}

/// A JSON artifact manifest on disk (or on stdin for `-`).
///
/// The document is either a bare array of artifacts or an object with an
/// `artifacts` array:
///
/// ```json
/// { "artifacts": [
///     { "groupId": "org.slf4j", "artifactId": "slf4j-api", "version": "2.0.9",
///       "scope": "compile", "repositoryUrl": "https://repo.maven.apache.org/maven2" }
/// ] }
/// ```
#[derive(Debug, Clone)]
pub struct JsonManifest {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestDocument {
    List(Vec<ArtifactRecord>),
    Wrapped { artifacts: Vec<ArtifactRecord> },
}

impl JsonManifest {
    /// Create a manifest source for a path (`-` reads stdin).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the manifest is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse manifest JSON. `path` is only used for error reporting.
    pub fn parse_str(text: &str, path: &Path) -> Result<Vec<ArtifactRecord>, ReportError> {
        let document: ManifestDocument = serde_json::from_str(text)
            .map_err(|e| ReportError::malformed_manifest(path, e))?;
        Ok(match document {
            ManifestDocument::List(artifacts) => artifacts,
            ManifestDocument::Wrapped { artifacts } => artifacts,
        })
    }

    fn read_text(&self) -> Result<String, ReportError> {
        if self.path.as_os_str() == STDIN_PATH {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| ReportError::io(&self.path, e))?;
            Ok(text)
        } else {
            std::fs::read_to_string(&self.path).map_err(|e| ReportError::io(&self.path, e))
        }
    }
}

impl ArtifactSource for JsonManifest {
    fn artifacts(&self) -> Result<Vec<ArtifactRecord>, ReportError> {
        let text = self.read_text()?;
        let artifacts = Self::parse_str(&text, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            count = artifacts.len(),
            "loaded artifact manifest"
        );
        Ok(artifacts)
    }
}
