// =====================================================
// FILE: tests/store_tests.rs - PREFERENCE PERSISTENCE TESTS
// =====================================================

use ark_i18n::{Catalog, LanguageManager, Locale, PreferenceStore, TomlStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn store_at(dir: &TempDir) -> (TomlStore, PathBuf) {
    let path = dir.path().join("ark.toml");
    (TomlStore::with_paths(vec![path.clone()]), path)
}

#[test]
fn test_save_rewrites_only_the_current_line() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_at(&dir);
    fs::write(
        &path,
        "# Ark settings\n[general]\nlog_level = \"debug\"\n\n[language]\ncurrent = \"zh\"\n",
    )
    .unwrap();

    store.save(Locale::En).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("current = \"en\""), "Got: {}", content);
    assert!(content.contains("# Ark settings"), "Comments must survive a save");
    assert!(
        content.contains("log_level = \"debug\""),
        "Unrelated sections must survive a save"
    );
}

#[test]
fn test_save_appends_language_section_when_absent() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_at(&dir);
    fs::write(&path, "[general]\nlog_level = \"info\"\n").unwrap();

    store.save(Locale::En).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[language]"));
    assert!(content.contains("current = \"en\""));
    assert_eq!(store.load().unwrap(), Some(Locale::En));
}

#[test]
fn test_load_missing_file_is_none() {
    let dir = TempDir::new().unwrap();
    let (store, _) = store_at(&dir);
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_save_without_file_creates_default_config() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_at(&dir);
    assert!(!path.exists());

    store.save(Locale::En).unwrap();

    assert!(path.exists(), "First save must create the config file");
    let content = fs::read_to_string(&path).unwrap();
    assert!(
        content.contains("log_level = \"info\""),
        "Created file must carry the default sections, got: {}",
        content
    );
    assert!(content.contains("current = \"en\""), "Got: {}", content);
    assert_eq!(store.load().unwrap(), Some(Locale::En));
}

#[test]
fn test_save_creates_missing_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".ark").join("ark.toml");
    let mut store = TomlStore::with_paths(vec![path.clone()]);

    store.save(Locale::Zh).unwrap();

    assert!(path.exists());
    assert_eq!(store.load().unwrap(), Some(Locale::Zh));
}

#[test]
fn test_load_rejects_unknown_locale() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_at(&dir);
    fs::write(&path, "[language]\ncurrent = \"fr\"\n").unwrap();

    assert!(store.load().is_err(), "Unknown locale code must not parse");
}

#[test]
fn test_roundtrip() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_at(&dir);
    fs::write(&path, "[language]\ncurrent = \"zh\"\n").unwrap();

    for locale in [Locale::En, Locale::Zh, Locale::En] {
        store.save(locale).unwrap();
        assert_eq!(store.load().unwrap(), Some(locale));
    }
}

#[test]
fn test_preference_survives_across_manager_instances() {
    let dir = TempDir::new().unwrap();
    let (_, path) = store_at(&dir);
    fs::write(&path, "[language]\ncurrent = \"zh\"\n").unwrap();
    let catalog = Catalog::from_entries([("greeting", "你好", "Hello")]);

    // First "page load": toggle to en.
    let mut manager = LanguageManager::new(
        catalog.clone(),
        Box::new(TomlStore::with_paths(vec![path.clone()])),
    );
    assert_eq!(manager.current_locale(), Locale::Zh);
    manager.toggle();

    // Second "page load": the preference is picked up again.
    let mut manager = LanguageManager::new(catalog, Box::new(TomlStore::with_paths(vec![path])));
    assert_eq!(manager.current_locale(), Locale::En);
    assert_eq!(manager.translate("greeting"), "Hello");
}
