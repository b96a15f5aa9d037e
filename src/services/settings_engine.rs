// Guidebook Settings Engine
// Loads, saves, updates and resets GuideBookSettings stored as a JSON file.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::GuideBookSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<GuideBookSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &GuideBookSettings;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine that persists settings as pretty-printed JSON.
pub struct SettingsEngine {
    config_path: String,
    settings: GuideBookSettings,
}

impl SettingsEngine {
    /// Uses `path_override` if given, else `settings.json` in the platform
    /// config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string()
        });

        Self {
            config_path,
            settings: GuideBookSettings::default(),
        }
    }

    fn validate(settings: &GuideBookSettings) -> Result<(), SettingsError> {
        if settings.book.max_bookmarks == 0 {
            return Err(SettingsError::InvalidValue(
                "book.max_bookmarks must be at least 1".to_string(),
            ));
        }
        if settings.book.start_page.is_empty() {
            return Err(SettingsError::InvalidValue(
                "book.start_page must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Replaces the value at a dot-separated path inside `root`. Only existing
    /// keys can be replaced.
    fn replace_at_path(root: &mut Value, key: &str, value: Value) -> Result<(), SettingsError> {
        let not_found = || SettingsError::InvalidKey(format!("Key '{}' not found in settings", key));

        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key),
        };

        let mut current = root;
        if let Some(parents) = parents {
            for part in parents.split('.') {
                current = current.get_mut(part).ok_or_else(not_found)?;
            }
        }

        match current {
            Value::Object(map) if map.contains_key(leaf) => {
                map.insert(leaf.to_string(), value);
                Ok(())
            }
            Value::Object(_) => Err(not_found()),
            _ => Err(SettingsError::InvalidKey(format!(
                "Cannot navigate to key '{}': intermediate value is not an object",
                key
            ))),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Missing file: defaults. Malformed or invalid file: error.
    fn load(&mut self) -> Result<GuideBookSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            info!("No settings file at {}, using defaults", self.config_path);
            self.settings = GuideBookSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: GuideBookSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Self::validate(&settings)?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))
    }

    fn get_settings(&self) -> &GuideBookSettings {
        &self.settings
    }

    /// Updates one setting by dot path (e.g. `"book.max_bookmarks"`), validates
    /// the result and saves immediately.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        Self::replace_at_path(&mut json_value, key, value)?;

        let updated: GuideBookSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        Self::validate(&updated)?;

        self.settings = updated;
        self.save()
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        warn!("Resetting settings at {} to defaults", self.config_path);
        self.settings = GuideBookSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
