//! Reading extractor output from disk.

use ripple_analysis::ingest::*;
use ripple_core::errors::{InputError, RippleErrorCode};

#[test]
fn test_missing_dependency_file_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_dependency_input(&dir.path().join("deps.json")).unwrap_err();
    assert!(matches!(err, InputError::DependencyMapUnavailable { .. }));
    assert_eq!(err.error_code(), "INPUT_MISSING");
}

#[test]
fn test_load_plain_map_and_separate_cycles() {
    let dir = tempfile::TempDir::new().unwrap();
    let deps = dir.path().join("deps.json");
    let cycles = dir.path().join("cycles.json");
    std::fs::write(&deps, r#"{"src/a.ts": ["src/b.ts"], "src/b.ts": ["src/a.ts"]}"#).unwrap();
    std::fs::write(&cycles, r#"[["src/a.ts", "src/b.ts"]]"#).unwrap();

    let input = load_dependency_input(&deps).unwrap();
    assert_eq!(input.dependencies.len(), 2);
    assert!(input.cycles.is_none());

    let chains = load_cycles(&cycles).unwrap();
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].len(), 2);
}

#[test]
fn test_load_document_with_cycles() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("graph.json");
    std::fs::write(
        &path,
        r#"{"dependencies": {"a": [], "b": ["a"]}, "cycles": []}"#,
    )
    .unwrap();

    let input = load_dependency_input(&path).unwrap();
    assert_eq!(input.dependencies["b"].len(), 1);
    assert_eq!(input.cycles, Some(Vec::new()));
}

#[test]
fn test_malformed_json_reports_origin() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();

    let err = load_dependency_input(&path).unwrap_err();
    assert_eq!(err.error_code(), "INPUT_MALFORMED");
    assert!(err.to_string().contains("broken.json"));
}
