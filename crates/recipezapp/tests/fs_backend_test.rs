use recipezapp::api::RecipezApi;
use recipezapp::filter::FilterKind;
use recipezapp::model::{Ingredient, Recipe, RecipeDraft};
use recipezapp::notify::{NotifyKind, RecordingNotifier};
use recipezapp::state::Phase;
use recipezapp::store::backend::StorageBackend;
use recipezapp::store::fs_backend::FsBackend;
use recipezapp::store::{RecipeStore, StoreKey};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn open(dir: &TempDir) -> RecipezApi<FsBackend, RecordingNotifier> {
    let store = RecipeStore::with_backend(FsBackend::new(dir.path().to_path_buf()));
    RecipezApi::new(store, RecordingNotifier::new())
}

#[test]
fn test_fs_backend_basic_item_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.get_item("recipes").unwrap(), None);

    backend.set_item("recipes", "[]").unwrap();
    assert_eq!(backend.get_item("recipes").unwrap(), Some("[]".to_string()));

    backend.remove_item("recipes").unwrap();
    assert_eq!(backend.get_item("recipes").unwrap(), None);
}

#[test]
fn test_fs_backend_remove_missing_is_ok() {
    let (_dir, backend) = setup();
    backend.remove_item("favorites").unwrap();
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deeper").join("data");
    let backend = FsBackend::new(nested.clone());

    backend.set_item("favorites", "[\"1\"]").unwrap();
    assert!(nested.join("favorites.json").exists());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.set_item("recipes", "first").unwrap();
    backend.set_item("recipes", "second").unwrap();

    let on_disk = fs::read_to_string(dir.path().join("recipes.json")).unwrap();
    assert_eq!(on_disk, "second");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_store_over_fs_round_trip() {
    let (_dir, backend) = setup();
    let store = RecipeStore::with_backend(backend);

    store
        .save(StoreKey::Favorites, &["1".to_string(), "user-1-abcdef01".to_string()])
        .unwrap();
    let favorites: Vec<String> = store.load(StoreKey::Favorites).unwrap().unwrap();
    assert_eq!(favorites, vec!["1", "user-1-abcdef01"]);
}

#[test]
fn test_session_state_persists_across_reopen() {
    let dir = TempDir::new().unwrap();

    let added_id = {
        let mut api = open(&dir);
        api.initialize();
        let draft = RecipeDraft::new("Miso Soup", "Quick and warming")
            .with_ingredient(Ingredient::new("miso paste", 2.0, "tbsp"));
        let added = api.add_recipe(draft).unwrap();
        api.toggle_favorite(&added.id).unwrap();
        api.toggle_favorite("3").unwrap();
        api.toggle_favorite("3").unwrap();
        added.id
    };

    let mut api = open(&dir);
    let view = api.initialize();
    assert_eq!(view.phase, Phase::Ready);
    assert_eq!(view.favorite_ids, vec![added_id.clone()]);
    assert!(api.recipe(&added_id).unwrap().favorite);
    assert!(!api.recipe("3").unwrap().favorite);
}

#[test]
fn test_filters_are_session_only() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = open(&dir);
        api.initialize();
        api.set_filter(FilterKind::Diet, "vegan", true);
        api.toggle_favorite("1").unwrap();
    }

    let mut api = open(&dir);
    let view = api.initialize();
    assert!(!view.has_active_filters());
    assert_eq!(view.filtered_recipes.len(), api.all_recipes().len());
}

#[test]
fn test_corrupt_catalog_file_enters_error_phase() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("recipes.json"), "{ not json").unwrap();

    let mut api = open(&dir);
    let view = api.initialize();

    assert_eq!(view.phase, Phase::Error);
    assert!(view.filtered_recipes.is_empty());
    let notes = api.notifier().take();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotifyKind::Destructive);

    // Fixing the file and retrying recovers.
    fs::write(dir.path().join("recipes.json"), "[]").unwrap();
    let view = api.initialize();
    assert_eq!(view.phase, Phase::Ready);
    assert_eq!(view.error, None);
}

#[test]
fn test_saved_catalog_is_plain_json() {
    let dir = TempDir::new().unwrap();
    let mut api = open(&dir);
    api.initialize();
    api.toggle_favorite("2").unwrap();

    let raw = fs::read_to_string(dir.path().join("recipes.json")).unwrap();
    let saved: Vec<Recipe> = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved.len(), 5);
    assert!(raw.contains("\"userSubmitted\""));
    assert!(raw.contains("\"readyInMinutes\""));
}
