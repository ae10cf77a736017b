use depprint_core::{
    ArtifactRecord, CoordinateKey, Inherited, Keyed, KeyedSet, LineFormatter, ModuleRecord,
    PrintConfig, ReportError, write_report,
};
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_coordinate_key_equality_ignores_other_fields() {
    let module_a = ModuleRecord::new("org.example", "core", "1.0", "jar", "/a");
    let module_b = ModuleRecord::new("org.example", "core", "2.0", "pom", "/b");

    assert_eq!(module_a.key(), module_b.key());
    assert_eq!(module_a.key(), CoordinateKey::new("org.example", "core"));
}

#[test]
fn test_keyed_set_strictly_ascending_without_duplicates() {
    let input = vec![
        ArtifactRecord::new("org.b", "x", "1", "compile"),
        ArtifactRecord::new("org.a", "y", "1", "compile"),
        ArtifactRecord::new("org.b", "x", "9", "compile"),
        ArtifactRecord::new("org.a", "b", "1", "compile"),
        ArtifactRecord::new("org.a", "y", "2", "runtime"),
    ];

    let records = input.into_iter().collect::<KeyedSet<_>>().into_vec();
    let keys: Vec<CoordinateKey> = records.iter().map(Keyed::key).collect();

    assert_eq!(keys.len(), 3);
    for pair in keys.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    // first seen wins
    assert_eq!(records[2].version, "1");
}

#[test]
fn test_modules_and_artifacts_share_key_type() {
    let mut set = KeyedSet::new();
    set.insert(ModuleRecord::new("g", "m2", "1", "jar", "/m2"));
    set.insert(ModuleRecord::new("g", "m1", "1", "jar", "/m1"));

    let names: Vec<_> = set.iter().map(|m| m.artifact_id.to_string()).collect();
    assert_eq!(names, vec!["m1", "m2"]);
}

#[test]
fn test_inherited_from_module() {
    let parent = ModuleRecord::new("G1", "A1", "1.0", "pom", "/root");
    assert_eq!(parent.inherited(), Inherited::new("G1", "1.0"));
}

#[test]
fn test_artifact_manifest_field_names() {
    let json = r#"{
        "groupId": "G1",
        "artifactId": "A1",
        "version": "1.0",
        "repositoryUrl": "https://example.test/repo"
    }"#;

    let artifact: ArtifactRecord = serde_json::from_str(json).unwrap();
    assert_eq!(artifact.artifact_type, "jar");
    assert_eq!(artifact.scope, "compile");
    assert_eq!(artifact.repository_url(), Some("https://example.test/repo"));
}

#[test]
fn test_scenario_formatting_suffix() {
    let config = PrintConfig::default();
    let artifact = ArtifactRecord::new("G1", "A1", "1.0", "compile")
        .with_repository_url("https://example.test/repo");

    assert_eq!(
        LineFormatter::new(&config).format_artifact(&artifact),
        "G1:A1:1.0 from https://example.test/repo"
    );
}

#[test]
fn test_config_roundtrip_through_toml_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("depprint.toml");
    fs::write(
        &path,
        "include_project_artifacts = false\nprint_packaging = true\nproject_group_ids = [\"G1\"]\n",
    )
    .unwrap();

    let config = PrintConfig::from_toml_file(&path).unwrap();

    assert!(!config.include_project_artifacts);
    assert!(config.print_packaging);
    assert_eq!(config.project_group_ids, BTreeSet::from(["G1".to_string()]));
}

#[test]
fn test_config_file_missing() {
    let temp = TempDir::new().unwrap();
    let err = PrintConfig::from_toml_file(temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ReportError::NotFound { .. }));
}

#[test]
fn test_write_report_end_to_end() {
    let temp = TempDir::new().unwrap();
    let config = PrintConfig::builder()
        .output_directory(temp.path().join("nested/dir"))
        .build()
        .unwrap();

    let modules = vec![
        ModuleRecord::new("G1", "A1-m1", "1.0", "jar", "/m1"),
        ModuleRecord::new("G1", "A1-m2", "1.0", "jar", "/m2"),
    ];
    let lines = LineFormatter::new(&config).module_lines(&modules);
    let path = write_report(&config, &lines).unwrap();

    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "G1:A1-m1:1.0\nG1:A1-m2:1.0\n"
    );
}
