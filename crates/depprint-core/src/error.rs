//! Error types for report generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A project descriptor exists but could not be parsed.
    #[error("Malformed descriptor {path}: {message}")]
    MalformedDescriptor { path: PathBuf, message: String },

    /// A coordinate could not be resolved from the descriptor or its ancestors.
    #[error("Descriptor {path} does not declare a {field} and has nothing to inherit it from")]
    MissingCoordinate { path: PathBuf, field: &'static str },

    /// A declared module points back at itself or one of its aggregators.
    #[error("Module cycle: {path} is declared below itself")]
    ModuleCycle { path: PathBuf },

    /// The artifact manifest could not be parsed.
    #[error("Malformed artifact manifest {path}: {message}")]
    MalformedManifest { path: PathBuf, message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ReportError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create a malformed descriptor error.
    pub fn malformed_descriptor(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::MalformedDescriptor {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a malformed manifest error.
    pub fn malformed_manifest(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::MalformedManifest {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_io() {
        let err = ReportError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ReportError::PermissionDenied { .. }));

        let err = ReportError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "bad"),
        );
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn test_module_cycle_message() {
        let err = ReportError::ModuleCycle {
            path: PathBuf::from("/p/agg"),
        };
        assert!(err.to_string().contains("/p/agg"));
    }

    #[test]
    fn test_missing_coordinate_message() {
        let err = ReportError::MissingCoordinate {
            path: PathBuf::from("/p/pom.xml"),
            field: "groupId",
        };
        assert!(err.to_string().contains("groupId"));
        assert!(err.to_string().contains("/p/pom.xml"));
    }
}
