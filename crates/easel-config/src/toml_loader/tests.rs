//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_easel_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        easel_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[canvas]
style_prefix = "ed-"

[frame]
recalc_debounce_ms = 20
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.canvas.style_prefix, "ed-");
    assert_eq!(config.frame.recalc_debounce_ms, 20);
    // Defaults preserved
    assert_eq!(config.frame.transition_fallback_ms, 1000);
    assert_eq!(config.frame.animation_class, "frame-wrapper--anim");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    assert!(matches!(
        load_from_path(&path).unwrap_err(),
        easel_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[frame]\nrecalc_debounce_ms = 5000\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.frame.recalc_debounce_ms, 5000);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("easel").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.canvas.style_prefix, "gjs-");
    assert_eq!(config.frame.recalc_debounce_ms, 0);
}

#[test]
fn default_template_parses_and_validates() {
    let content = template::default_config_toml();
    let config: crate::EaselConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_easel() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("easel/config.toml"));
    }
}
