use std::path::Path;

use clipper_common::ConfigError;

use super::*;
use crate::schema::{ClipperConfig, DisplayStyleSetting};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let err = load_from_path(Path::new("/tmp/nonexistent_clipper_config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[history]
size = 25

[hotkey]
display_style = "words"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.history.size, 25);
    assert_eq!(config.hotkey.display_style, DisplayStyleSetting::Words);
    assert_eq!(config.events.capacity, 256);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_values_are_still_returned() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[history]\nsize = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.history.size, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clipper").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, ClipperConfig::default());
}

#[test]
fn template_mentions_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    create_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    for section in ["[history]", "[hotkey]", "[events]", "[logging]"] {
        assert!(content.contains(section), "missing {section}");
    }
}

#[test]
fn default_config_path_ends_with_clipper_config() {
    let path = default_config_path().unwrap();
    assert!(path.ends_with("clipper/config.toml"), "got {path:?}");
}
