//! # Command Layer
//!
//! One module per operation. Each command takes the [`CatalogState`] it transforms
//! and, when it needs to persist, the [`crate::store::RecipeStore`]. Commands return a
//! [`CmdResult`] describing what changed and what the user should be told; they never
//! deliver notifications themselves.
//!
//! Every command that changes the catalog recomputes the filtered view before
//! returning, so the view is never stale between operations.
//!
//! [`CatalogState`]: crate::state::CatalogState

use crate::model::Recipe;
use crate::notify::Notification;

pub mod create;
pub mod favorite;
pub mod filter;
pub mod helpers;
pub mod load;

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_recipes: Vec<Recipe>,
    pub notifications: Vec<Notification>,
}

impl CmdResult {
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }
}
