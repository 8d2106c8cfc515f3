//! # CLI Behavior
//!
//! This is **one possible UI client** for recipez, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Naked Execution (`recipez`)
//!
//! Running `recipez` with no arguments lists the whole catalog.
//!
//! ## Filtering
//!
//! `recipez list --diet vegan --cuisine indian -q curry` applies the filters for
//! this invocation only. Diets match if any selected diet is present, cuisines
//! likewise, and the query searches title, summary and ingredient names.
//!
//! ## Output Streams
//!
//! Results go to stdout. Notifications (favorite changes, added recipes, storage
//! errors) go to stderr, as do logs (`-v` or `RUST_LOG`).
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers
//! - `render`: Output formatting and the terminal notifier
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
