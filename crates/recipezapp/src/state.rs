//! # Catalog State
//!
//! [`CatalogState`] is everything the API owns: the canonical catalog, the favorites
//! set, the active filter criteria, the derived filtered view and the lifecycle flags.
//! Commands transform it; presentation layers only ever see a [`RecipeView`] copy.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized ──initialize──▶ Loading ──ok──▶ Ready ◀──┐
//!                                  │                      │ retry / successful save
//!                                  └──store failure──▶ Error
//! ```
//!
//! `Error` is not terminal: the catalog is empty but editable, every operation is
//! allowed, and the next successful load or save moves back to `Ready`.

use crate::filter::{filter_recipes, FilterCriteria};
use crate::model::Recipe;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub(crate) catalog: Vec<Recipe>,
    /// Favorite ids in the order they were added.
    pub(crate) favorites: Vec<String>,
    pub(crate) criteria: FilterCriteria,
    pub(crate) filtered: Vec<Recipe>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) phase: Phase,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &[Recipe] {
        &self.catalog
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered(&self) -> &[Recipe] {
        &self.filtered
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.catalog.iter().find(|r| r.id == id)
    }

    /// Re-derive the filtered view from the catalog and the current criteria.
    pub(crate) fn recompute(&mut self) {
        self.filtered = filter_recipes(&self.catalog, &self.criteria);
        tracing::debug!(
            total = self.catalog.len(),
            shown = self.filtered.len(),
            "filtered view recomputed"
        );
    }

    /// Make every catalog flag agree with the favorites set.
    pub(crate) fn reconcile_favorites(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.favorites.len());
        for id in self.favorites.drain(..) {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        self.favorites = seen;

        for recipe in &mut self.catalog {
            recipe.favorite = self.favorites.contains(&recipe.id);
        }
    }

    /// Record a store failure without touching the catalog.
    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.phase = Phase::Error;
    }

    /// Clear a previous failure after a successful store round-trip.
    pub(crate) fn recover(&mut self) {
        if self.phase == Phase::Error {
            self.error = None;
            self.phase = Phase::Ready;
        }
    }

    pub fn view(&self) -> RecipeView {
        RecipeView {
            filtered_recipes: self.filtered.clone(),
            favorite_ids: self.favorites.clone(),
            loading: self.loading,
            error: self.error.clone(),
            selected_diets: self.criteria.diets.iter().cloned().collect(),
            selected_cuisines: self.criteria.cuisines.iter().cloned().collect(),
            search_query: self.criteria.query.clone(),
            phase: self.phase,
        }
    }
}

/// An immutable snapshot of what a presentation layer needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeView {
    pub filtered_recipes: Vec<Recipe>,
    pub favorite_ids: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_diets: Vec<String>,
    pub selected_cuisines: Vec<String>,
    pub search_query: String,
    pub phase: Phase,
}

impl RecipeView {
    pub fn has_active_filters(&self) -> bool {
        !self.selected_diets.is_empty()
            || !self.selected_cuisines.is_empty()
            || !self.search_query.is_empty()
    }
}
