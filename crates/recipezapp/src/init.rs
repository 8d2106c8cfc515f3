//! # Context Wiring
//!
//! [`initialize`] turns "where should the data live" into a ready [`RecipezApi`]
//! over a [`FsBackend`].
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit `data_override` (the CLI `--data` flag) wins.
//! 2. Otherwise the `RECIPEZ_DATA` environment variable, if set and non-empty.
//! 3. Otherwise the OS-appropriate data directory (via the `directories` crate).
//!
//! The directory holds `recipes.json`, `favorites.json` and, optionally,
//! `recipez.toml`. It is created on first write, not here.

use crate::api::RecipezApi;
use crate::config::RecipezConfig;
use crate::error::{RecipezError, Result};
use crate::notify::Notifier;
use crate::store::fs_backend::FsBackend;
use crate::store::RecipeStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_ENV_VAR: &str = "RECIPEZ_DATA";
pub const CONFIG_FILE: &str = "recipez.toml";

pub struct RecipezContext<N: Notifier> {
    pub api: RecipezApi<FsBackend, N>,
    pub config: RecipezConfig,
    pub data_dir: PathBuf,
}

/// Pick the data directory, see the module docs for the order.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "recipez", "recipez")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RecipezError::Io(std::io::Error::other(
                "could not determine a data directory, set RECIPEZ_DATA",
            ))
        })
}

/// Load `recipez.toml` from the data directory. Missing or unreadable files yield defaults.
pub fn load_config(data_dir: &std::path::Path) -> RecipezConfig {
    Clapfig::builder()
        .app_name("recipez")
        .file_name(CONFIG_FILE)
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

/// Resolve the data directory, load config and build an API.
///
/// The returned API is not yet initialized; callers decide when to load.
pub fn initialize<N: Notifier>(
    data_override: Option<PathBuf>,
    notifier: N,
) -> Result<RecipezContext<N>> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);
    tracing::debug!(data_dir = %data_dir.display(), ?config, "context resolved");

    let store = RecipeStore::with_backend(FsBackend::new(data_dir.clone()))
        .with_pretty_json(config.pretty_json);
    let api = RecipezApi::new(store, notifier).with_seed_catalog(config.seed_catalog);

    Ok(RecipezContext {
        api,
        config,
        data_dir,
    })
}
