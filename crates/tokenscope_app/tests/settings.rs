use std::fs;

use tempfile::TempDir;
use tokenscope_app::{load_settings, save_settings, Settings};
use tokenscope_core::TokenView;
use tokenscope_engine::ModelKey;

#[test]
fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let settings = load_settings(&temp.path().join("absent.ron"));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.delay_ms, 200);
}

#[test]
fn saved_settings_load_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("settings.ron");
    let settings = Settings {
        model: ModelKey::Gemini,
        view: TokenView::Ids,
        delay_ms: 5,
    };

    save_settings(&path, &settings).unwrap();
    assert_eq!(load_settings(&path), settings);

    // Replace existing
    let updated = Settings {
        model: ModelKey::Grook,
        ..settings
    };
    save_settings(&path, &updated).unwrap();
    assert_eq!(load_settings(&path), updated);
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.ron");
    fs::write(&path, "(model: \"not-a-model\"").unwrap();
    assert_eq!(load_settings(&path), Settings::default());
}

#[test]
fn save_into_file_path_fails() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let result = save_settings(&blocker.join("settings.ron"), &Settings::default());
    assert!(result.is_err());
}
