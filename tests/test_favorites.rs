use recipe_finder::favorites::{load_favorites, FAVORITES_KEY};
use recipe_finder::{AppConfig, FileStore, Filter, KeyValueStore, MemoryStore, RecipeApp};
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_toggle_twice_restores_favorites() {
    let mut storage = MemoryStore::new();
    storage.set(FAVORITES_KEY, "[2, 4]").unwrap();
    let mut app = RecipeApp::builder().storage(storage).build();
    let before = app.state().favorites().clone();

    for id in [1, 2, 4, 8] {
        app.toggle_favorite(id);
        app.toggle_favorite(id);
        assert_eq!(app.state().favorites(), &before);
    }
}

#[test]
fn test_toggle_updates_favorites_view() {
    let mut app = RecipeApp::builder().filter(Filter::Favorites).build();
    assert_eq!(app.view().shown(), 0);

    let view = app.toggle_favorite(5);
    assert_eq!(view.ids, vec![5]);
    assert!(view.markup.contains("favorite-btn active"));

    let view = app.toggle_favorite(5);
    assert!(view.ids.is_empty());
    assert_eq!(view.summary(), "Showing 0 of 8 recipes");
}

#[test]
fn test_favorites_survive_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut app = RecipeApp::builder()
            .storage(FileStore::new(&path))
            .build();
        app.toggle_favorite(3);
        app.toggle_favorite(7);
        app.toggle_favorite(1);
        app.toggle_favorite(3);
    }

    let app = RecipeApp::builder()
        .storage(FileStore::new(&path))
        .build();
    assert_eq!(app.state().favorites(), &BTreeSet::from([1, 7]));
}

#[test]
fn test_malformed_storage_starts_empty_and_recovers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, r#"{"recipe-finder.favorites": "[1, oops"}"#).unwrap();

    let mut app = RecipeApp::builder()
        .storage(FileStore::new(&path))
        .build();
    assert!(app.state().favorites().is_empty());

    app.toggle_favorite(2);
    let reloaded = load_favorites(&FileStore::new(&path), FAVORITES_KEY);
    assert_eq!(reloaded, BTreeSet::from([2]));
}

#[test]
fn test_custom_storage_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let mut app = RecipeApp::builder()
        .storage(FileStore::new(&path))
        .storage_key("my.favorites")
        .build();
    app.toggle_favorite(6);

    let store = FileStore::new(&path);
    assert_eq!(store.get("my.favorites").unwrap().as_deref(), Some("[6]"));
    assert!(store.get(FAVORITES_KEY).unwrap().is_none());
}

#[test]
fn test_builder_from_config() {
    let dir = TempDir::new().unwrap();
    let recipes_path = dir.path().join("recipes.json");
    fs::write(
        &recipes_path,
        r#"[
            {"id": 10, "title": "Pancakes", "difficulty": "easy", "time": 20,
             "ingredients": ["flour", "milk", "eggs"],
             "steps": ["Whisk", {"text": "Fry", "substeps": ["Heat pan", "Flip"]}]},
            {"id": 11, "title": "Lasagna", "difficulty": "hard", "time": 90}
        ]"#,
    )
    .unwrap();

    let config = AppConfig {
        recipes_path: Some(recipes_path),
        storage_path: dir.path().join("state").join("storage.json"),
        ..AppConfig::default()
    };

    let mut app = RecipeApp::builder().config(&config).unwrap().build();
    assert_eq!(app.store().len(), 2);

    app.toggle_favorite(11);
    assert!(config.storage_path.exists());
}

#[test]
fn test_builder_from_config_with_missing_recipes_file() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        recipes_path: Some(dir.path().join("missing.json")),
        ..AppConfig::default()
    };

    assert!(RecipeApp::builder().config(&config).is_err());
}
