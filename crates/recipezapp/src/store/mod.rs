//! # Storage Layer
//!
//! Recipez persists two flat snapshots, nothing more:
//!
//! | Key | Contents |
//! |-----|----------|
//! | `recipes` | JSON array of [`crate::model::Recipe`] objects (the whole catalog) |
//! | `favorites` | JSON array of recipe id strings |
//!
//! Both are rewritten wholesale after every mutation that touches them.
//!
//! ## Two Layers
//!
//! - [`backend::StorageBackend`] is the raw key-value contract, the same shape as a
//!   browser's local storage: `get_item` / `set_item` / `remove_item` over strings.
//!   It knows nothing about recipes.
//! - [`RecipeStore`] is the adapter the API talks to. It owns serialization and maps
//!   every backend or parse failure to [`RecipezError::StoreUnavailable`], tagged with
//!   the key involved.
//!
//! ## Absent vs Empty
//!
//! `load` returns `Ok(None)` when a key was never written. That is different from
//! `Ok(Some(vec![]))`, a previously saved empty list. The API relies on this to decide
//! whether to seed the catalog on first run.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── recipes.json     # Catalog snapshot
//! ├── favorites.json   # Favorite ids
//! └── recipez.toml     # Optional configuration
//! ```

use crate::error::{RecipezError, Result};
use backend::StorageBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

/// The logical keys recipez writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Recipes,
    Favorites,
}

impl StoreKey {
    pub const ALL: [StoreKey; 2] = [StoreKey::Recipes, StoreKey::Favorites];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Recipes => "recipes",
            StoreKey::Favorites => "favorites",
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed adapter over a raw key-value backend.
pub struct RecipeStore<B: StorageBackend> {
    pub(crate) backend: B,
    pretty: bool,
}

impl<B: StorageBackend> RecipeStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            pretty: true,
        }
    }

    /// Write compact JSON instead of pretty-printed JSON.
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load a sequence. `Ok(None)` means the key was never written.
    pub fn load<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<Vec<T>>> {
        let raw = self
            .backend
            .get_item(key.as_str())
            .map_err(|e| RecipezError::store(key.as_str(), e))?;

        let Some(text) = raw else {
            tracing::debug!(%key, "key never written");
            return Ok(None);
        };

        let items: Vec<T> =
            serde_json::from_str(&text).map_err(|e| RecipezError::store(key.as_str(), e))?;
        tracing::debug!(%key, count = items.len(), "loaded");
        Ok(Some(items))
    }

    /// Replace the sequence stored under `key`.
    pub fn save<T: Serialize>(&self, key: StoreKey, items: &[T]) -> Result<()> {
        let text = if self.pretty {
            serde_json::to_string_pretty(items)
        } else {
            serde_json::to_string(items)
        }
        .map_err(|e| RecipezError::store(key.as_str(), e))?;

        self.backend
            .set_item(key.as_str(), &text)
            .map_err(|e| RecipezError::store(key.as_str(), e))?;
        tracing::debug!(%key, count = items.len(), "saved");
        Ok(())
    }

    /// Remove both keys, returning the store to its never-written state.
    pub fn clear(&self) -> Result<()> {
        for key in StoreKey::ALL {
            self.backend
                .remove_item(key.as_str())
                .map_err(|e| RecipezError::store(key.as_str(), e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::*;
    use crate::model::Recipe;
    use crate::test_utils::recipe;

    fn store() -> RecipeStore<MemBackend> {
        RecipeStore::with_backend(MemBackend::new())
    }

    #[test]
    fn load_of_unwritten_key_is_absent() {
        let store = store();
        let loaded: Option<Vec<Recipe>> = store.load(StoreKey::Recipes).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn empty_sequence_is_distinct_from_absent() {
        let store = store();
        store.save::<String>(StoreKey::Favorites, &[]).unwrap();
        let loaded: Option<Vec<String>> = store.load(StoreKey::Favorites).unwrap();
        assert_eq!(loaded, Some(vec![]));
    }

    #[test]
    fn recipes_round_trip() {
        let store = store();
        let catalog = vec![
            recipe("1").diets(&["vegan"]).favorite(true).build(),
            recipe("2").cuisines(&["thai"]).ingredient("rice").build(),
        ];
        store.save(StoreKey::Recipes, &catalog).unwrap();
        let loaded: Vec<Recipe> = store.load(StoreKey::Recipes).unwrap().unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn favorites_round_trip_compact() {
        let store = store().with_pretty_json(false);
        let ids = vec!["1".to_string(), "user-42-abcd".to_string()];
        store.save(StoreKey::Favorites, &ids).unwrap();

        let raw = store.backend().get_item("favorites").unwrap().unwrap();
        assert_eq!(raw, r#"["1","user-42-abcd"]"#);

        let loaded: Vec<String> = store.load(StoreKey::Favorites).unwrap().unwrap();
        assert_eq!(loaded, ids);
    }

    #[test]
    fn corrupt_text_is_store_unavailable() {
        let store = store();
        store.backend().put_raw("recipes", "{not json");
        let err = store.load::<Recipe>(StoreKey::Recipes).unwrap_err();
        assert!(err.is_store_failure());
        assert!(err.to_string().contains("recipes"));
    }

    #[test]
    fn write_failure_is_store_unavailable() {
        let store = store();
        store.backend().set_simulate_write_error(true);
        let err = store
            .save(StoreKey::Favorites, &["1".to_string()])
            .unwrap_err();
        assert!(matches!(err, RecipezError::StoreUnavailable { ref key, .. } if key == "favorites"));
    }

    #[test]
    fn clear_returns_keys_to_absent() {
        let store = store();
        store.save(StoreKey::Favorites, &["1".to_string()]).unwrap();
        store.save(StoreKey::Recipes, &[recipe("1").build()]).unwrap();
        store.clear().unwrap();
        assert!(store.load::<String>(StoreKey::Favorites).unwrap().is_none());
        assert!(store.load::<Recipe>(StoreKey::Recipes).unwrap().is_none());
    }
}
