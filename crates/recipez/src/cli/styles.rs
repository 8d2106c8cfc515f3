//! Terminal styles for the recipez CLI.
//!
//! Renderers refer to styles by what the text *is* (a title, a tag, an error),
//! never by color. `console` drops the escape codes when output is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static LIST_ID: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static FAVORITE: Lazy<Style> = Lazy::new(|| Style::new().magenta().bold());
pub static TAG: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());

// Notifications go to stderr, whose color support is detected separately.
pub static INFO_NOTICE: Lazy<Style> = Lazy::new(|| Style::new().green().bold().for_stderr());
pub static DESTRUCTIVE_NOTICE: Lazy<Style> = Lazy::new(|| Style::new().red().bold().for_stderr());
