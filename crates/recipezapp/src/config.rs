//! # Configuration
//!
//! Recipez configuration is managed by [`clapfig`], which handles layered loading
//! from a TOML file, environment variables and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `RECIPEZ__SEED_CATALOG`, `RECIPEZ__PRETTY_JSON`, ...
//! 2. **Data directory config**: `recipez.toml` next to the saved catalog.
//! 3. **Compiled defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_catalog` | `true` | Start from the built-in recipes when nothing is saved |
//! | `pretty_json` | `true` | Indent the JSON written to the data directory |
//! | `placeholder_image` | placeholder URL | Image shown for recipes without one |

use crate::model::PLACEHOLDER_IMAGE;
use confique::Config;
use serde::{Deserialize, Serialize};

/// Configuration for recipez, stored in `recipez.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipezConfig {
    /// Populate an empty data directory with the built-in recipes.
    #[config(default = true)]
    pub seed_catalog: bool,

    /// Write indented JSON. Compact output is read back the same way.
    #[config(default = true)]
    pub pretty_json: bool,

    /// Image URL used when a recipe has none.
    #[config(default = "https://via.placeholder.com/600x400?text=No+Image")]
    pub placeholder_image: String,
}

impl Default for RecipezConfig {
    fn default() -> Self {
        Self {
            seed_catalog: true,
            pretty_json: true,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl RecipezConfig {
    /// The placeholder image, falling back to the built-in one when configured blank.
    pub fn placeholder_image(&self) -> &str {
        let configured = self.placeholder_image.trim();
        if configured.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            configured
        }
    }
}
