//! # API Facade: the Recipe State Manager
//!
//! [`RecipezApi`] is the single entry point for every recipez operation, regardless
//! of the UI being used. It owns the catalog state, the store adapter and the
//! notifier; callers hold the API, never the state.
//!
//! ## Role and Responsibilities
//!
//! The API:
//! - **Owns** the [`CatalogState`] (catalog, favorites, criteria, derived view)
//! - **Dispatches** each operation to its command module
//! - **Delivers** the notifications commands queue, after the command has finished
//! - **Hands out snapshots** ([`RecipeView`]) instead of references into its state
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `filter.rs`
//! - **Presentation**: No formatting, no stdout/stderr
//!
//! ## Execution Model
//!
//! Every mutating operation takes `&mut self` and runs to completion, including its
//! store writes, before returning. Two operations can therefore never interleave
//! their load/save calls against the same key.
//!
//! ## Generic Over Backend and Notifier
//!
//! - Production: `RecipezApi<FsBackend, _>`
//! - Testing: `RecipezApi<MemBackend, RecordingNotifier>`

use crate::commands::{self, CmdResult};
use crate::error::{RecipezError, Result};
use crate::filter::{FilterKind, FilterUpdate};
use crate::model::{Recipe, RecipeDraft};
use crate::notify::{Notification, Notifier};
use crate::state::{CatalogState, Phase, RecipeView};
use crate::store::backend::StorageBackend;
use crate::store::RecipeStore;

pub struct RecipezApi<B: StorageBackend, N: Notifier> {
    state: CatalogState,
    store: RecipeStore<B>,
    notifier: N,
    seed_catalog: bool,
}

impl<B: StorageBackend, N: Notifier> RecipezApi<B, N> {
    /// Create an uninitialized API. Call [`RecipezApi::initialize`] before use.
    pub fn new(store: RecipeStore<B>, notifier: N) -> Self {
        Self {
            state: CatalogState::new(),
            store,
            notifier,
            seed_catalog: true,
        }
    }

    /// Whether an empty store is populated with the built-in recipes.
    pub fn with_seed_catalog(mut self, seed: bool) -> Self {
        self.seed_catalog = seed;
        self
    }

    /// Load catalog and favorites. Safe to call again to retry after a failure.
    pub fn initialize(&mut self) -> RecipeView {
        let result = commands::load::run(&mut self.state, &self.store, self.seed_catalog);
        self.deliver(&result);
        self.state.view()
    }

    pub fn view(&self) -> RecipeView {
        self.state.view()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The whole catalog, ignoring filters.
    pub fn all_recipes(&self) -> &[Recipe] {
        self.state.catalog()
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.state.find(id)
    }

    /// Favorite recipes, in catalog order.
    pub fn favorite_recipes(&self) -> Vec<Recipe> {
        self.state
            .catalog()
            .iter()
            .filter(|r| r.favorite)
            .cloned()
            .collect()
    }

    /// Flip a recipe's favorite state. Returns the updated recipe.
    ///
    /// An unknown id is reported as [`RecipezError::RecipeNotFound`] and changes nothing.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<Recipe> {
        let result = commands::favorite::toggle(&mut self.state, &self.store, id)?;
        self.deliver(&result);
        first_affected(result, id)
    }

    /// Add a recipe from a draft. Returns the stored recipe with its fresh id.
    pub fn add_recipe(&mut self, draft: RecipeDraft) -> Result<Recipe> {
        match commands::create::run(&mut self.state, &self.store, draft) {
            Ok(result) => {
                self.deliver(&result);
                first_affected(result, "new recipe")
            }
            Err(RecipezError::Validation(e)) => {
                self.notifier
                    .notify(&Notification::destructive("Invalid recipe", e.to_string()));
                Err(RecipezError::Validation(e))
            }
            Err(e) => Err(e),
        }
    }

    pub fn update_filter(&mut self, update: FilterUpdate) -> RecipeView {
        commands::filter::update(&mut self.state, update);
        self.state.view()
    }

    /// [`RecipezApi::update_filter`] from the loose `(type, value, selected)` triple.
    pub fn set_filter(&mut self, kind: FilterKind, value: &str, selected: bool) -> RecipeView {
        self.update_filter(FilterUpdate::from_parts(kind, value, selected))
    }

    pub fn clear_filters(&mut self) -> RecipeView {
        commands::filter::clear(&mut self.state);
        self.state.view()
    }

    /// Erase everything saved and start over from the seed catalog.
    pub fn reset(&mut self) -> Result<RecipeView> {
        let result = commands::load::reset(&mut self.state, &self.store, self.seed_catalog)?;
        self.deliver(&result);
        Ok(self.state.view())
    }

    pub fn store(&self) -> &RecipeStore<B> {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn deliver(&self, result: &CmdResult) {
        for notification in &result.notifications {
            self.notifier.notify(notification);
        }
    }
}

fn first_affected(result: CmdResult, what: &str) -> Result<Recipe> {
    result
        .affected_recipes
        .into_iter()
        .next()
        .ok_or_else(|| RecipezError::RecipeNotFound(what.to_string()))
}
