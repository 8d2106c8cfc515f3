//! Plain-text rendering of recipes and notifications.
//!
//! Every renderer returns a `String`; printing is left to the command handlers so
//! output can be asserted on without a terminal.

use super::styles;
use recipezapp::filter::{CUISINE_OPTIONS, DIET_OPTIONS};
use recipezapp::model::Recipe;
use recipezapp::notify::{Notification, Notifier, NotifyKind};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 32;
const FAVORITE_MARKER: &str = "★";

/// Notifier that prints to stderr, one line per notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        eprintln!("{}", format_notification(notification));
    }
}

pub fn format_notification(notification: &Notification) -> String {
    let style = match notification.kind {
        NotifyKind::Info => &*styles::INFO_NOTICE,
        NotifyKind::Destructive => &*styles::DESTRUCTIVE_NOTICE,
    };
    format!(
        "{}: {}",
        style.apply_to(&notification.title),
        notification.message
    )
}

/// One line per recipe: favorite marker, id, title, ready time, tags.
pub fn render_list(recipes: &[Recipe], filtered: bool) -> String {
    if recipes.is_empty() {
        return if filtered {
            "No recipes match the current filters.\n".to_string()
        } else {
            "No recipes yet. Add one with `recipez add`.\n".to_string()
        };
    }

    let id_width = recipes.iter().map(|r| r.id.width()).max().unwrap_or(0);
    let mut out = String::new();
    for recipe in recipes {
        let marker = if recipe.favorite {
            styles::FAVORITE.apply_to(FAVORITE_MARKER).to_string()
        } else {
            " ".to_string()
        };
        let minutes = recipe
            .ready_in_minutes
            .map(|m| format!("{:>4} min", m))
            .unwrap_or_else(|| " ".repeat(8));
        let tags: Vec<&str> = recipe
            .diets
            .iter()
            .chain(recipe.cuisines.iter())
            .map(String::as_str)
            .collect();

        let line = format!(
            "{} {} {} {} {}",
            marker,
            styles::LIST_ID.apply_to(pad_to_width(&recipe.id, id_width)),
            pad_to_width(&truncate_to_width(&recipe.title, TITLE_WIDTH), TITLE_WIDTH),
            styles::MUTED.apply_to(minutes),
            styles::TAG.apply_to(tags.join(" ")),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// The full recipe: header, meta line, tags, ingredients and numbered steps.
pub fn render_recipe(recipe: &Recipe, placeholder_image: &str) -> String {
    let mut out = String::new();

    let marker = if recipe.favorite {
        format!(" {}", styles::FAVORITE.apply_to(FAVORITE_MARKER))
    } else {
        String::new()
    };
    out.push_str(&format!("{}{}\n", styles::TITLE.apply_to(&recipe.title), marker));

    let mut meta = vec![format!("Serves {}", recipe.servings)];
    if let Some(minutes) = recipe.ready_in_minutes {
        meta.push(format!("Ready in {} min", minutes));
    }
    if recipe.user_submitted {
        meta.push("Your recipe".to_string());
    }
    out.push_str(&format!("{}\n", styles::MUTED.apply_to(meta.join(" · "))));
    out.push_str(&format!(
        "{}\n\n",
        styles::MUTED.apply_to(recipe.image_or(placeholder_image))
    ));

    out.push_str(&format!("{}\n", recipe.summary));

    let tag_rows = [
        ("Diets", &recipe.diets),
        ("Cuisines", &recipe.cuisines),
        ("Dish types", &recipe.dish_types),
    ];
    for (label, tags) in tag_rows {
        if !tags.is_empty() {
            out.push_str(&format!(
                "{}: {}\n",
                label,
                styles::TAG.apply_to(tags.join(", "))
            ));
        }
    }

    out.push_str(&format!("\n{}\n", styles::HEADING.apply_to("Ingredients")));
    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        let quantity = [format_amount(ingredient.amount), ingredient.unit.clone()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("{:>3}. {} {}\n", i + 1, quantity, ingredient.name));
    }

    let steps = recipe.steps();
    if !steps.is_empty() {
        out.push_str(&format!("\n{}\n", styles::HEADING.apply_to("Instructions")));
        for (i, step) in steps.iter().enumerate() {
            out.push_str(&format!("{:>3}. {}\n", i + 1, step));
        }
    }

    if let Some(url) = &recipe.source_url {
        out.push_str(&format!("\nSource: {}\n", url));
    }
    out
}

/// The tags the filters know about.
pub fn render_tags() -> String {
    format!(
        "{}\n  {}\n{}\n  {}\n",
        styles::HEADING.apply_to("Diets"),
        DIET_OPTIONS.join(", "),
        styles::HEADING.apply_to("Cuisines"),
        CUISINE_OPTIONS.join(", "),
    )
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// `2.0` renders as `2`, `0.5` stays `0.5`.
fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    let budget = max_width.saturating_sub(1);
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
