//! # Recipez Architecture
//!
//! Recipez is a **UI-agnostic recipe catalog library**. The command-line client is one
//! presentation layer among many possible ones; everything that matters lives here.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (recipez CLI, or any other UI)                │
//! │  - Renders RecipeView snapshots, shows notifications        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the catalog state (the state manager)               │
//! │  - Dispatches to commands, persists, fires notifications    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Filter Engine (filter.rs)  │
//! │  - Pure state transitions over CatalogState                 │
//! │  - No I/O, no notifications, no logging subscribers         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecipeStore adapter over a key-value StorageBackend      │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: One Owner, Derived Views
//!
//! The catalog and the favorites set are owned by [`api::RecipezApi`]. Callers never
//! get mutable access to them: they call an operation and read back an immutable
//! [`state::RecipeView`]. The filtered view is always recomputed from the catalog,
//! so `recipe.favorite == favorites.contains(recipe.id)` holds everywhere.
//!
//! ## Module Overview
//!
//! - [`api`]: The state manager, entry point for all operations
//! - [`commands`]: State transitions for each operation
//! - [`filter`]: The filter engine and filter criteria
//! - [`model`]: Core data types (`Recipe`, `Ingredient`, `RecipeDraft`)
//! - [`notify`]: The notification collaborator interface
//! - [`seed`]: The built-in catalog used on first run
//! - [`state`]: Catalog state and view snapshots
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration
//! - [`init`]: Context wiring (data directory, config, store)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod notify;
pub mod seed;
pub mod state;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
