use crate::commands::CmdResult;
use crate::notify::Notification;
use crate::state::CatalogState;
use crate::store::backend::StorageBackend;
use crate::store::{RecipeStore, StoreKey};

pub const SAVE_FAILED: &str = "Failed to save recipes. Changes will be lost when you close the app.";

/// Write the given keys from `state` to the store.
///
/// A failure is recorded on the state and reported as a notification; the in-memory
/// change stands. Returns whether every key was written.
pub fn persist<B: StorageBackend>(
    state: &mut CatalogState,
    store: &RecipeStore<B>,
    keys: &[StoreKey],
    result: &mut CmdResult,
) -> bool {
    for key in keys {
        let saved = match key {
            StoreKey::Recipes => store.save(*key, &state.catalog),
            StoreKey::Favorites => store.save(*key, &state.favorites),
        };
        if let Err(e) = saved {
            tracing::warn!(error = %e, "persist failed");
            state.fail(format!("{} ({})", SAVE_FAILED, e));
            result.add_notification(Notification::destructive("Error", SAVE_FAILED));
            return false;
        }
    }
    state.recover();
    true
}
