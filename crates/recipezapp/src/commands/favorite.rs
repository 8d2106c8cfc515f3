use crate::commands::helpers::persist;
use crate::commands::CmdResult;
use crate::error::{RecipezError, Result};
use crate::notify::Notification;
use crate::state::CatalogState;
use crate::store::backend::StorageBackend;
use crate::store::{RecipeStore, StoreKey};

/// Flip the favorite state of one recipe and persist catalog and favorites.
///
/// The filtered view is patched in place rather than recomputed: no filter looks at
/// favorite status, so membership cannot change.
pub fn toggle<B: StorageBackend>(
    state: &mut CatalogState,
    store: &RecipeStore<B>,
    id: &str,
) -> Result<CmdResult> {
    let Some(pos) = state.catalog.iter().position(|r| r.id == id) else {
        tracing::warn!(id, "toggle favorite: no such recipe");
        return Err(RecipezError::RecipeNotFound(id.to_string()));
    };

    let now_favorite = !state.is_favorite(id);
    if now_favorite {
        state.favorites.push(id.to_string());
    } else {
        state.favorites.retain(|f| f != id);
    }

    for recipe in state
        .catalog
        .iter_mut()
        .chain(state.filtered.iter_mut())
        .filter(|r| r.id == id)
    {
        recipe.favorite = now_favorite;
    }

    let mut result = CmdResult::default();
    result.affected_recipes.push(state.catalog[pos].clone());
    if now_favorite {
        tracing::info!(id, "added to favorites");
        result.add_notification(Notification::info(
            "Added to favorites",
            "Recipe added to your favorites",
        ));
    } else {
        tracing::info!(id, "removed from favorites");
        result.add_notification(Notification::info(
            "Removed from favorites",
            "Recipe removed from your favorites",
        ));
    }

    persist(
        state,
        store,
        &[StoreKey::Recipes, StoreKey::Favorites],
        &mut result,
    );
    Ok(result)
}
