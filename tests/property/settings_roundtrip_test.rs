//! Property-based tests for SettingsEngine dot-path updates.
//!
//! Values written through `set_value` survive a reload from disk, and
//! writes to unknown keys never change the loaded settings.

use proptest::prelude::*;
use seedbrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use serde_json::json;
use tempfile::TempDir;

fn fresh_engine(dir: &TempDir) -> (SettingsEngine, String) {
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    let mut engine = SettingsEngine::new(Some(path.clone()));
    engine.load().expect("load defaults");
    (engine, path)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn written_values_survive_reload(
        animation_ms in 0u64..5_000,
        prefixes in prop::collection::vec("https://[a-z]{1,8}\\.test/[a-z]{0,6}", 0..4),
        extension in "\\.[a-z0-9]{1,4}",
    ) {
        let dir = TempDir::new().unwrap();
        let (mut engine, path) = fresh_engine(&dir);

        engine.set_value("overlay.animation_ms", json!(animation_ms)).unwrap();
        engine.set_value("downloads.intercept_prefixes", json!(prefixes.clone())).unwrap();
        engine.set_value("downloads.allowed_extension", json!(extension.clone())).unwrap();

        let mut reloaded = SettingsEngine::new(Some(path));
        let settings = reloaded.load().unwrap();
        prop_assert_eq!(settings.overlay.animation_ms, animation_ms);
        prop_assert_eq!(settings.downloads.intercept_prefixes, prefixes);
        prop_assert_eq!(settings.downloads.allowed_extension, extension);
    }

    #[test]
    fn unknown_keys_never_mutate(key in "[a-z]{1,8}\\.[a-z]{1,8}") {
        prop_assume!(!matches!(key.split('.').next(), Some("general" | "downloads" | "overlay")));
        let dir = TempDir::new().unwrap();
        let (mut engine, _) = fresh_engine(&dir);
        let before = engine.get_settings().clone();

        prop_assert!(engine.set_value(&key, json!("x")).is_err());
        prop_assert_eq!(engine.get_settings(), &before);
    }
}
