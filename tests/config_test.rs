use coltrans::config::{Config, SearchParams};
use coltrans::error::TranspositionError;
use coltrans::search::{BruteForce, KeyLengthRange};
use std::fs::File;
use std::io::Write;

fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("coltrans.json");
    let mut file = File::create(&path).unwrap();
    write!(file, "{}", body).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.search.max_key_length, 9);
    assert_eq!(config.search.chunk_size, 5040);
    assert_eq!(config.search.top, 20);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, r#"{ "search": { "max_key_length": 6 } }"#);

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.search.max_key_length, 6);
    assert_eq!(config.search.chunk_size, 5040);
    assert_eq!(config.search.top, 20);
}

#[test]
fn test_empty_object_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "{}");
    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.search.max_key_length, 9);
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "{ search: ");
    assert!(matches!(
        Config::load_from_file(&path),
        Err(TranspositionError::Json(_))
    ));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::load_from_file(dir.path().join("absent.json")),
        Err(TranspositionError::Io(_))
    ));
}

#[test]
fn test_search_follows_config() {
    let config = Config {
        search: SearchParams {
            max_key_length: 4,
            chunk_size: 3,
            top: 5,
        },
    };
    let search = BruteForce::from(&config);
    assert_eq!(search.max_key_length(), 4);

    let res = search.run("ABCDEFG", KeyLengthRange::single(5).unwrap());
    assert!(matches!(
        res,
        Err(TranspositionError::TooExpensive { length: 5, cap: 4 })
    ));
    assert_eq!(
        search.run("ABCDEFG", KeyLengthRange::single(4).unwrap()).unwrap().len(),
        24
    );
}

#[test]
fn test_config_serializes_field_names() {
    let json = serde_json::to_string(&Config::default()).unwrap();
    assert!(json.contains("\"max_key_length\":9"));
}
