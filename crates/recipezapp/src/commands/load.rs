use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Recipe;
use crate::notify::Notification;
use crate::seed::seed_recipes;
use crate::state::{CatalogState, Phase};
use crate::store::backend::StorageBackend;
use crate::store::{RecipeStore, StoreKey};

pub const LOAD_FAILED: &str = "Failed to load recipes. Please try again later.";

/// Populate the state from the store.
///
/// Never fails: a store failure leaves an empty, editable catalog, sets the error
/// and queues a destructive notification.
pub fn run<B: StorageBackend>(
    state: &mut CatalogState,
    store: &RecipeStore<B>,
    seed_catalog: bool,
) -> CmdResult {
    state.loading = true;
    state.phase = Phase::Loading;
    state.criteria.clear();

    let mut result = CmdResult::default();

    match read_snapshot(store, seed_catalog) {
        Ok((catalog, favorites)) => {
            state.catalog = catalog;
            state.favorites = favorites;
            state.reconcile_favorites();
            state.error = None;
            state.phase = Phase::Ready;
            tracing::debug!(
                recipes = state.catalog.len(),
                favorites = state.favorites.len(),
                "catalog loaded"
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, "loading catalog failed");
            state.catalog.clear();
            state.favorites.clear();
            state.fail(format!("{} ({})", LOAD_FAILED, e));
            result.add_notification(Notification::destructive("Error", LOAD_FAILED));
        }
    }

    state.recompute();
    state.loading = false;
    result
}

fn read_snapshot<B: StorageBackend>(
    store: &RecipeStore<B>,
    seed_catalog: bool,
) -> Result<(Vec<Recipe>, Vec<String>)> {
    let catalog = match store.load::<Recipe>(StoreKey::Recipes)? {
        Some(catalog) => catalog,
        None if seed_catalog => {
            tracing::debug!("no saved catalog, using seed recipes");
            seed_recipes()
        }
        None => Vec::new(),
    };
    let favorites = store
        .load::<String>(StoreKey::Favorites)?
        .unwrap_or_default();
    Ok((catalog, favorites))
}

/// Erase both persisted keys and load again from scratch.
pub fn reset<B: StorageBackend>(
    state: &mut CatalogState,
    store: &RecipeStore<B>,
    seed_catalog: bool,
) -> Result<CmdResult> {
    store.clear()?;
    let mut result = run(state, store, seed_catalog);
    result.add_notification(Notification::info(
        "Catalog reset",
        "Saved recipes and favorites were cleared",
    ));
    Ok(result)
}
