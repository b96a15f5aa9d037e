//! Property-based tests for settings persistence.

use guidebook::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use guidebook::types::settings::{BookSettings, GuideBookSettings, StorageSettings};
use proptest::prelude::*;
use serde_json::json;

fn arb_settings() -> impl Strategy<Value = GuideBookSettings> {
    (
        1usize..64,
        "/[a-z_]{1,10}\\.md",
        "[a-z_]{1,10}\\.db",
        "\\PC{1,20}",
    )
        .prop_map(|(max_bookmarks, start_page, database_file, owner)| GuideBookSettings {
            book: BookSettings {
                max_bookmarks,
                start_page,
            },
            storage: StorageSettings {
                database_file,
                owner,
            },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn json_round_trip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let restored: GuideBookSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, settings);
    }

    #[test]
    fn save_then_load_restores_values(settings in arb_settings()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let path = path.to_str().unwrap().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine
            .set_value("book.max_bookmarks", json!(settings.book.max_bookmarks))
            .unwrap();
        engine
            .set_value("book.start_page", json!(settings.book.start_page))
            .unwrap();
        engine
            .set_value("storage.database_file", json!(settings.storage.database_file))
            .unwrap();
        engine
            .set_value("storage.owner", json!(settings.storage.owner))
            .unwrap();

        let mut reloaded = SettingsEngine::new(Some(path));
        reloaded.load().unwrap();
        prop_assert_eq!(reloaded.get_settings(), &settings);
    }
}
