//! Project descriptor (`pom.xml`) model.

use std::path::{Component, Path, PathBuf};

use compact_str::CompactString;
use serde::Deserialize;

use depprint_core::{Inherited, ModuleRecord, ReportError};

/// Packaging assumed when a descriptor does not declare one.
pub const DEFAULT_PACKAGING: &str = "jar";

/// Relative path of the parent descriptor when `<relativePath>` is omitted.
pub const DEFAULT_PARENT_PATH: &str = "../pom.xml";

/// Reference to a parent project declared in a descriptor's `<parent>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub group_id: Option<CompactString>,
    pub artifact_id: Option<CompactString>,
    pub version: Option<CompactString>,
    /// Path of the parent descriptor relative to this module's directory.
    pub relative_path: Option<String>,
}

impl ParentRef {
    /// Directory expected to hold the parent descriptor, or `None` when the
    /// parent is explicitly not on disk (empty `<relativePath/>`).
    pub fn directory(&self, module_root: &Path) -> Option<PathBuf> {
        let relative = match self.relative_path.as_deref() {
            Some("") => return None,
            Some(path) => path,
            None => DEFAULT_PARENT_PATH,
        };

        let target = module_root.join(relative);
        let dir = if relative.ends_with(".xml") {
            target.parent()?.to_path_buf()
        } else {
            target
        };
        Some(normalize(&dir))
    }
}

/// A parsed project descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// File the descriptor was read from.
    pub path: PathBuf,
    pub group_id: Option<CompactString>,
    pub artifact_id: CompactString,
    pub version: Option<CompactString>,
    pub packaging: CompactString,
    /// Declared submodule names, in declaration order.
    pub modules: Vec<String>,
    pub parent: Option<ParentRef>,
}

impl Descriptor {
    /// Parse descriptor XML. `path` is only used for error reporting.
    pub fn parse(xml: &str, path: impl Into<PathBuf>) -> Result<Self, ReportError> {
        let path = path.into();
        let raw: RawProject = quick_xml::de::from_str(xml)
            .map_err(|e| ReportError::malformed_descriptor(&path, e))?;

        let artifact_id = non_empty(raw.artifact_id)
            .ok_or_else(|| ReportError::malformed_descriptor(&path, "missing <artifactId>"))?;

        let parent = raw.parent.map(|p| ParentRef {
            group_id: non_empty(p.group_id),
            artifact_id: non_empty(p.artifact_id),
            version: non_empty(p.version),
            relative_path: p.relative_path.map(|r| r.trim().to_string()),
        });

        let modules = raw
            .modules
            .map(|m| m.module)
            .unwrap_or_default()
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();

        Ok(Self {
            path,
            group_id: non_empty(raw.group_id),
            artifact_id,
            version: non_empty(raw.version),
            packaging: non_empty(raw.packaging)
                .unwrap_or_else(|| CompactString::const_new(DEFAULT_PACKAGING)),
            modules,
            parent,
        })
    }

    /// Group id declared by the descriptor itself, falling back to `<parent>`.
    pub fn declared_group_id(&self) -> Option<&CompactString> {
        self.group_id
            .as_ref()
            .or_else(|| self.parent.as_ref().and_then(|p| p.group_id.as_ref()))
    }

    /// Version declared by the descriptor itself, falling back to `<parent>`.
    pub fn declared_version(&self) -> Option<&CompactString> {
        self.version
            .as_ref()
            .or_else(|| self.parent.as_ref().and_then(|p| p.version.as_ref()))
    }

    /// Check if this module aggregates further modules.
    pub fn is_aggregator(&self) -> bool {
        !self.modules.is_empty()
    }

    /// Resolve this descriptor against the attributes inherited from the
    /// enclosing module.
    pub fn resolve(&self, root: &Path, inherited: &Inherited) -> ModuleRecord {
        let group_id = self
            .declared_group_id()
            .cloned()
            .unwrap_or_else(|| inherited.group_id.clone());
        let version = self
            .declared_version()
            .cloned()
            .unwrap_or_else(|| inherited.version.clone());

        ModuleRecord::new(
            group_id,
            self.artifact_id.clone(),
            version,
            self.packaging.clone(),
            root,
        )
    }

    /// Resolve the descriptor of a walk's root, which has nothing to inherit.
    pub fn resolve_root(&self, root: &Path) -> Result<ModuleRecord, ReportError> {
        let group_id = self
            .declared_group_id()
            .ok_or_else(|| ReportError::MissingCoordinate {
                path: self.path.clone(),
                field: "groupId",
            })?;
        let version = self
            .declared_version()
            .ok_or_else(|| ReportError::MissingCoordinate {
                path: self.path.clone(),
                field: "version",
            })?;

        Ok(self.resolve(root, &Inherited::new(group_id.clone(), version.clone())))
    }

    /// Check if this descriptor is the project a `<parent>` element points at.
    pub fn is_referenced_by(&self, parent: &ParentRef) -> bool {
        let artifact_matches = parent
            .artifact_id
            .as_ref()
            .is_some_and(|a| *a == self.artifact_id);
        let group_matches = match (&parent.group_id, self.declared_group_id()) {
            (Some(expected), Some(actual)) => expected == actual,
            (None, _) => true,
            (Some(_), None) => false,
        };
        artifact_matches && group_matches
    }
}

/// Lexically resolve `.` and `..` components.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn non_empty(value: Option<String>) -> Option<CompactString> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(CompactString::from)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    packaging: Option<String>,
    parent: Option<RawParent>,
    modules: Option<RawModules>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParent {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    relative_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawModules {
    #[serde(default)]
    module: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGGREGATOR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <groupId>G1</groupId>
    <artifactId>A1</artifactId>
    <version>1.0</version>
    <packaging>pom</packaging>
    <modules>
        <module>m1</module>
        <module> m2 </module>
    </modules>
    <dependencies>
        <dependency>
            <groupId>org.other</groupId>
            <artifactId>lib</artifactId>
            <version>9.9</version>
        </dependency>
    </dependencies>
</project>"#;

    #[test]
    fn test_parse_aggregator() {
        let d = Descriptor::parse(AGGREGATOR, "/p/pom.xml").unwrap();
        assert_eq!(d.group_id.as_deref(), Some("G1"));
        assert_eq!(d.artifact_id, "A1");
        assert_eq!(d.version.as_deref(), Some("1.0"));
        assert_eq!(d.packaging, "pom");
        assert_eq!(d.modules, vec!["m1", "m2"]);
        assert!(d.is_aggregator());
        assert!(d.parent.is_none());
    }

    #[test]
    fn test_parse_defaults() {
        let d = Descriptor::parse(
            "<project><artifactId>leaf</artifactId></project>",
            "/p/leaf/pom.xml",
        )
        .unwrap();
        assert_eq!(d.packaging, DEFAULT_PACKAGING);
        assert!(d.group_id.is_none());
        assert!(d.version.is_none());
        assert!(d.modules.is_empty());
        assert!(!d.is_aggregator());
    }

    #[test]
    fn test_parse_empty_modules_element() {
        let d = Descriptor::parse(
            "<project><artifactId>x</artifactId><modules/></project>",
            "/p/pom.xml",
        )
        .unwrap();
        assert!(d.modules.is_empty());
    }

    #[test]
    fn test_parse_missing_artifact_id() {
        let err = Descriptor::parse("<project><groupId>g</groupId></project>", "/p/pom.xml")
            .unwrap_err();
        assert!(matches!(err, ReportError::MalformedDescriptor { .. }));
    }

    #[test]
    fn test_parse_malformed_xml() {
        let err = Descriptor::parse("<project><artifactId>x</groupId>", "/p/pom.xml").unwrap_err();
        assert!(matches!(err, ReportError::MalformedDescriptor { .. }));
    }

    #[test]
    fn test_parent_element_fallback() {
        let d = Descriptor::parse(
            r#"<project>
                <parent>
                    <groupId>PG</groupId>
                    <artifactId>parent</artifactId>
                    <version>3.1</version>
                </parent>
                <artifactId>child</artifactId>
            </project>"#,
            "/p/child/pom.xml",
        )
        .unwrap();

        let record = d.resolve(Path::new("/p/child"), &Inherited::new("OTHER", "0.0"));
        assert_eq!(record.group_id, "PG");
        assert_eq!(record.version, "3.1");
    }

    #[test]
    fn test_resolve_inherits_when_unset() {
        let d = Descriptor::parse("<project><artifactId>m2</artifactId></project>", "/p/m2/pom.xml")
            .unwrap();
        let record = d.resolve(Path::new("/p/m2"), &Inherited::new("G1", "1.0"));
        assert_eq!(record, ModuleRecord::new("G1", "m2", "1.0", "jar", "/p/m2"));
    }

    #[test]
    fn test_resolve_own_values_win() {
        let d = Descriptor::parse(
            "<project><groupId>own</groupId><artifactId>m</artifactId><version>2</version></project>",
            "/p/m/pom.xml",
        )
        .unwrap();
        let record = d.resolve(Path::new("/p/m"), &Inherited::new("G1", "1.0"));
        assert_eq!(record.group_id, "own");
        assert_eq!(record.version, "2");
    }

    #[test]
    fn test_resolve_root_requires_coordinates() {
        let d = Descriptor::parse("<project><artifactId>r</artifactId></project>", "/p/pom.xml")
            .unwrap();
        let err = d.resolve_root(Path::new("/p")).unwrap_err();
        assert!(matches!(
            err,
            ReportError::MissingCoordinate { field: "groupId", .. }
        ));
    }

    #[test]
    fn test_parent_directory() {
        let parent = ParentRef {
            group_id: None,
            artifact_id: Some("p".into()),
            version: None,
            relative_path: None,
        };
        assert_eq!(parent.directory(Path::new("/a/b")), Some(PathBuf::from("/a")));

        let parent = ParentRef {
            relative_path: Some("../../build".to_string()),
            ..parent
        };
        assert_eq!(parent.directory(Path::new("/a/b/c")), Some(PathBuf::from("/a/build")));

        let parent = ParentRef {
            relative_path: Some(String::new()),
            ..parent
        };
        assert_eq!(parent.directory(Path::new("/a/b")), None);
    }

    #[test]
    fn test_is_referenced_by() {
        let d = Descriptor::parse(
            "<project><groupId>g</groupId><artifactId>root</artifactId></project>",
            "/p/pom.xml",
        )
        .unwrap();

        let matching = ParentRef {
            group_id: Some("g".into()),
            artifact_id: Some("root".into()),
            version: None,
            relative_path: None,
        };
        assert!(d.is_referenced_by(&matching));

        let other = ParentRef {
            group_id: Some("other".into()),
            ..matching
        };
        assert!(!d.is_referenced_by(&other));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/b/../c/./d")), PathBuf::from("/a/c/d"));
    }
}
