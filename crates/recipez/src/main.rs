//! # Recipez CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/recipezapp/`: the UI-agnostic library (state manager, filters, storage)
//! - `crates/recipez/`: this CLI tool, depends on `recipezapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/recipez/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering and notifications (render.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/recipezapp/src/api.rs)                   │
//! │  - Owns catalog state, persists, fires notifications        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is responsible
//! for argument parsing, log setup, context initialization, error reporting and
//! rendering.
//!
//! ## Sessions
//!
//! Each invocation is one session: the catalog is loaded from the data directory,
//! the filters given on the command line are applied, at most one mutation runs,
//! and the process exits. Filters are never saved; favorites and added recipes are.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
