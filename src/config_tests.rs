//! Tests for config loading

use super::*;
use std::fs;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from(&dir.path().join("absent.toml"));
    assert_eq!(result.config.clipboard.backend, BackendPreference::Auto);
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let (_dir, path) = write_config("[clipboard]\nbackend = \"osc52\"\nkitty_clear = true\n");
    let result = load_config_from(&path);
    assert_eq!(result.config.clipboard.backend, BackendPreference::Osc);
    assert!(result.config.clipboard.kitty_clear);
    assert!(result.warning.is_none());
}

#[test]
fn test_malformed_file_falls_back_with_warning() {
    let (_dir, path) = write_config("[clipboard\nbackend = \"auto\"");
    let result = load_config_from(&path);
    assert_eq!(result.config.clipboard.backend, BackendPreference::Auto);
    let warning = result.warning.expect("warning expected");
    assert!(warning.starts_with("Invalid config:"), "{warning}");
}

#[test]
fn test_invalid_backend_falls_back_with_warning() {
    let (_dir, path) = write_config("[clipboard]\nbackend = \"system\"\n");
    let result = load_config_from(&path);
    assert_eq!(result.config.clipboard.backend, BackendPreference::Auto);
    assert!(result.warning.is_some());
}

#[test]
fn test_unreadable_path_falls_back_with_warning() {
    // A directory exists but cannot be read as a file
    let dir = TempDir::new().unwrap();
    let result = load_config_from(dir.path());
    assert_eq!(result.config.clipboard.backend, BackendPreference::Auto);
    let warning = result.warning.expect("warning expected");
    assert!(warning.starts_with("Failed to read config:"), "{warning}");
}

#[test]
fn test_config_path_is_stable() {
    let path = get_config_path();
    assert_eq!(path, get_config_path());
    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("oscyank/config.toml") || path_str.ends_with("oscyank\\config.toml"),
        "unexpected config path: {path_str}"
    );
}
