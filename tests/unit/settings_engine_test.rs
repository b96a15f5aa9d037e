//! Integration-level unit tests for the SettingsEngine public API.

use guidebook::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use guidebook::types::errors::SettingsError;
use guidebook::types::settings::GuideBookSettings;
use serde_json::json;
use tempfile::TempDir;

/// Engine backed by `settings.json` inside `dir`.
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    assert_eq!(engine.load().unwrap(), GuideBookSettings::default());
    assert_eq!(engine.get_settings().book.max_bookmarks, 10);
}

#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();
    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("book.max_bookmarks", json!(4)).unwrap();
        engine.set_value("storage.owner", json!("alice")).unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.book.max_bookmarks, 4);
    assert_eq!(settings.storage.owner, "alice");
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.set_value("book.colour", json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(engine.set_value("", json!(1)), Err(SettingsError::InvalidKey(_))));
}

#[test]
fn test_set_value_rejects_wrong_type_and_invalid_values() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.set_value("book.max_bookmarks", json!("many")),
        Err(SettingsError::InvalidValue(_))
    ));
    assert!(matches!(
        engine.set_value("book.max_bookmarks", json!(0)),
        Err(SettingsError::InvalidValue(_))
    ));
    assert_eq!(engine.get_settings(), &GuideBookSettings::default());
    assert!(!dir.path().join("settings.json").exists(), "failed updates must not save");
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.set_value("book.start_page", json!("/a.md")).unwrap();

    engine.reset().unwrap();

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), GuideBookSettings::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), r#"{ "book": { "max_bookmarks": 3 } }"#).unwrap();

    let settings = engine_in_temp(&dir).load().unwrap();
    assert_eq!(settings.book.max_bookmarks, 3);
    assert_eq!(settings.book.start_page, GuideBookSettings::default().book.start_page);
    assert_eq!(settings.storage, GuideBookSettings::default().storage);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    assert!(matches!(
        engine_in_temp(&dir).load(),
        Err(SettingsError::SerializationError(_))
    ));
}

#[test]
fn test_default_config_path_uses_platform() {
    let engine = SettingsEngine::new(None);
    let path = engine.get_config_path();
    assert!(path.ends_with("settings.json"));
    assert!(path.contains("guidebook"));
}
