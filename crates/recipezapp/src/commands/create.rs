use crate::commands::helpers::persist;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{generate_recipe_id, RecipeDraft};
use crate::notify::Notification;
use crate::state::CatalogState;
use crate::store::backend::StorageBackend;
use crate::store::{RecipeStore, StoreKey};

/// Validate a draft, append it to the catalog and persist the catalog.
///
/// A rejected draft leaves the state untouched.
pub fn run<B: StorageBackend>(
    state: &mut CatalogState,
    store: &RecipeStore<B>,
    draft: RecipeDraft,
) -> Result<CmdResult> {
    let mut id = generate_recipe_id();
    while state.find(&id).is_some() {
        id = generate_recipe_id();
    }

    let recipe = draft.into_recipe(id).inspect_err(|e| {
        tracing::warn!(reason = %e, "rejected recipe draft");
    })?;

    tracing::info!(id = %recipe.id, title = %recipe.title, "recipe added");
    state.catalog.push(recipe.clone());
    state.recompute();

    let mut result = CmdResult::default().with_affected_recipes(vec![recipe]);
    result.add_notification(Notification::info(
        "Recipe Added",
        "Your recipe has been added successfully!",
    ));
    persist(state, store, &[StoreKey::Recipes], &mut result);
    Ok(result)
}
