use serde::{Deserialize, Serialize};

use super::page::MAIN_MENU_FILE;

/// Top-level guide book settings, persisted as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GuideBookSettings {
    pub book: BookSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookSettings {
    /// Most bookmark tabs a book may hold.
    pub max_bookmarks: usize,
    /// Page a freshly opened book shows.
    pub start_page: String,
}

impl Default for BookSettings {
    fn default() -> Self {
        Self {
            max_bookmarks: 10,
            start_page: MAIN_MENU_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Database file name inside the platform data directory.
    pub database_file: String,
    /// Key under which this user's book state is stored.
    pub owner: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_file: "guidebook.db".to_string(),
            owner: "local".to_string(),
        }
    }
}
