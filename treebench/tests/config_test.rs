//! Integration tests for Settings layered loading.
//!
//! Each test uses its own environment prefix so tests running in parallel
//! never see each other's variables.

use std::env;
use std::fs;

use tempfile::TempDir;

use treebench::config::{Settings, SettingsError};

#[test]
fn given_no_files_and_no_env_when_load_then_returns_defaults() {
    let settings = Settings::load_layers(None, None, "TREEBENCH_TEST_NONE").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_global_file_when_load_then_ignores_it() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("treebench.toml");
    let settings = Settings::load_layers(Some(&global), None, "TREEBENCH_TEST_MISSING").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_and_explicit_files_when_load_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("treebench.toml");
    let explicit = dir.path().join("local.toml");
    fs::write(&global, "repeat = 7\nmax_height = 6\n").unwrap();
    fs::write(&explicit, "max_height = 4\nroot = -2\n").unwrap();

    let settings =
        Settings::load_layers(Some(&global), Some(&explicit), "TREEBENCH_TEST_FILES").unwrap();

    assert_eq!(settings.repeat, 7);
    assert_eq!(settings.max_height, 4);
    assert_eq!(settings.root, -2);
    assert_eq!(settings.min_height, 1);
}

#[test]
fn given_missing_explicit_file_when_load_then_fails_with_read_error() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("nope.toml");
    let err = Settings::load_layers(None, Some(&explicit), "TREEBENCH_TEST_READ").unwrap_err();
    assert!(matches!(err, SettingsError::Read { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn given_malformed_file_when_load_then_fails_with_parse_error() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("bad.toml");
    fs::write(&explicit, "repeat = \"many\"\n").unwrap();
    let err = Settings::load_layers(None, Some(&explicit), "TREEBENCH_TEST_PARSE").unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
}

#[test]
fn given_unknown_key_when_load_then_fails_with_parse_error() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("typo.toml");
    fs::write(&explicit, "repaet = 3\n").unwrap();
    let err = Settings::load_layers(None, Some(&explicit), "TREEBENCH_TEST_TYPO").unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
}

#[test]
fn given_env_override_when_load_then_env_beats_files() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("local.toml");
    fs::write(&explicit, "repeat = 9\n").unwrap();
    env::set_var("TREEBENCH_TEST_ENV_REPEAT", "2");
    env::set_var("TREEBENCH_TEST_ENV_MIN_HEIGHT", "3");

    let settings = Settings::load_layers(None, Some(&explicit), "TREEBENCH_TEST_ENV").unwrap();

    env::remove_var("TREEBENCH_TEST_ENV_REPEAT");
    env::remove_var("TREEBENCH_TEST_ENV_MIN_HEIGHT");
    assert_eq!(settings.repeat, 2);
    assert_eq!(settings.min_height, 3);
    assert_eq!(settings.max_height, 10);
}

#[test]
fn given_invalid_env_value_when_load_then_fails_with_env_error() {
    env::set_var("TREEBENCH_TEST_BADENV_REPEAT", "lots");
    let result = Settings::load_layers(None, None, "TREEBENCH_TEST_BADENV");
    env::remove_var("TREEBENCH_TEST_BADENV_REPEAT");

    let err = result.unwrap_err();
    assert!(matches!(err, SettingsError::Env { ref key, .. } if key == "repeat"));
}
