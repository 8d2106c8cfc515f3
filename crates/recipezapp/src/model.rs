//! # Domain Model: Recipes, Ingredients and Drafts
//!
//! This module defines the core data structures for recipez: [`Recipe`], [`Ingredient`]
//! and [`RecipeDraft`], plus the rules that turn a draft into a catalog entry.
//!
//! ## Persisted Shape
//!
//! Recipes are stored as camelCase JSON objects so that snapshots written by the
//! browser version of the catalog load unchanged:
//!
//! ```text
//! {
//!   "id": "1",
//!   "title": "Vegetable Curry",
//!   "image": "https://...",
//!   "servings": 4,
//!   "readyInMinutes": 45,
//!   "summary": "...",
//!   "cuisines": ["indian", "asian"],
//!   "diets": ["vegetarian", "vegan"],
//!   "dishTypes": ["main course"],
//!   "instructions": "1. Heat oil. 2. Add onions.",
//!   "ingredients": [{ "name": "onion", "amount": 1, "unit": "large" }],
//!   "favorite": false
//! }
//! ```
//!
//! Optional fields may be absent. An empty `image` string is read as "no image".
//!
//! ## Drafts
//!
//! A [`RecipeDraft`] is what a submission form produces. [`RecipeDraft::validate`]
//! cleans it up and enforces the required fields:
//!
//! 1. **Trim**: title, summary and optional text fields are trimmed; blank optionals
//!    become `None`.
//! 2. **Ingredients**: rows with a blank name are dropped (an empty trailing row is
//!    normal in a form). At least one must remain.
//! 3. **Tags**: diets and cuisines are lowercased and de-duplicated, keeping the
//!    first occurrence.
//! 4. **Numbers**: servings ≥ 1, ready time ≥ 1 when given, amounts finite and ≥ 0.
//!
//! ## Instructions
//!
//! Instructions are free text where steps are introduced by `N.`. See
//! [`instruction_steps`].

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Shown by presentation layers for recipes without an image.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=No+Image";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_string_as_none"
    )]
    pub image: Option<String>,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_string_as_none"
    )]
    pub source_url: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub dish_types: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_string_as_none"
    )]
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub user_submitted: bool,
}

impl Recipe {
    /// The image URL, or `placeholder` when the recipe has none.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image.as_deref().unwrap_or(placeholder)
    }

    /// Instruction steps, in order. Empty when the recipe has no instructions.
    pub fn steps(&self) -> Vec<String> {
        self.instructions
            .as_deref()
            .map(instruction_steps)
            .unwrap_or_default()
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// An unvalidated recipe submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub servings: u32,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub dish_types: Vec<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            image: None,
            servings: 4,
            ready_in_minutes: None,
            source_url: None,
            summary: String::new(),
            cuisines: Vec::new(),
            diets: Vec::new(),
            dish_types: Vec::new(),
            instructions: None,
            ingredients: Vec::new(),
        }
    }
}

impl RecipeDraft {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            ..Default::default()
        }
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Check the required fields and return the cleaned-up draft.
    pub fn validate(self) -> Result<RecipeDraft, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let summary = self.summary.trim().to_string();
        if summary.is_empty() {
            return Err(ValidationError::MissingSummary);
        }

        if self.servings == 0 {
            return Err(ValidationError::InvalidServings);
        }
        if self.ready_in_minutes == Some(0) {
            return Err(ValidationError::InvalidReadyTime);
        }

        let mut ingredients = Vec::with_capacity(self.ingredients.len());
        for ingredient in self.ingredients {
            let name = ingredient.name.trim();
            if name.is_empty() {
                continue;
            }
            if !ingredient.amount.is_finite() || ingredient.amount < 0.0 {
                return Err(ValidationError::InvalidAmount(name.to_string()));
            }
            ingredients.push(Ingredient {
                id: ingredient.id,
                name: name.to_string(),
                amount: ingredient.amount,
                unit: ingredient.unit.trim().to_string(),
            });
        }
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }

        Ok(RecipeDraft {
            title,
            image: non_blank(self.image),
            servings: self.servings,
            ready_in_minutes: self.ready_in_minutes,
            source_url: non_blank(self.source_url),
            summary,
            cuisines: normalize_tags(&self.cuisines),
            diets: normalize_tags(&self.diets),
            dish_types: self
                .dish_types
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            instructions: non_blank(self.instructions),
            ingredients,
        })
    }

    /// Validate the draft and turn it into a user-submitted, non-favorite recipe.
    pub fn into_recipe(self, id: String) -> Result<Recipe, ValidationError> {
        let draft = self.validate()?;
        Ok(Recipe {
            id,
            title: draft.title,
            image: draft.image,
            servings: draft.servings,
            ready_in_minutes: draft.ready_in_minutes,
            source_url: draft.source_url,
            summary: draft.summary,
            cuisines: draft.cuisines,
            diets: draft.diets,
            dish_types: draft.dish_types,
            instructions: draft.instructions,
            ingredients: draft.ingredients,
            favorite: false,
            user_submitted: true,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Lowercase, trim and de-duplicate tags, keeping first-seen order.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// A fresh id for a user-submitted recipe: `user-<unix millis>-<8 hex chars>`.
///
/// The millisecond timestamp keeps ids sortable by creation; the uuid suffix keeps
/// two submissions within the same millisecond apart.
pub fn generate_recipe_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("user-{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
}

static STEP_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.").expect("valid regex"));

/// Split free-text instructions into steps.
///
/// Steps are introduced by a number followed by a period (`"1. Heat oil. 2. Add
/// onions."`). Empty fragments are dropped and each step is trimmed. Text without
/// any marker comes back as a single step.
pub fn instruction_steps(instructions: &str) -> Vec<String> {
    STEP_MARKER
        .split(instructions)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Error type for draft validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Title is empty after trimming
    MissingTitle,
    /// Summary is empty after trimming
    MissingSummary,
    /// No ingredient with a non-blank name
    NoIngredients,
    /// Servings must be at least 1
    InvalidServings,
    /// Ready time, when given, must be at least 1 minute
    InvalidReadyTime,
    /// An ingredient amount is negative or not a number
    InvalidAmount(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingTitle => write!(f, "title is required"),
            ValidationError::MissingSummary => write!(f, "summary is required"),
            ValidationError::NoIngredients => {
                write!(f, "at least one ingredient with a name is required")
            }
            ValidationError::InvalidServings => write!(f, "servings must be at least 1"),
            ValidationError::InvalidReadyTime => {
                write!(f, "ready time must be at least 1 minute")
            }
            ValidationError::InvalidAmount(name) => {
                write!(f, "amount for '{}' must be a non-negative number", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RecipeDraft {
        RecipeDraft::new("Pancakes", "Fluffy breakfast pancakes")
            .with_ingredient(Ingredient::new("flour", 2.0, "cups"))
    }

    #[test]
    fn validate_accepts_minimal_draft() {
        let draft = valid_draft().validate().unwrap();
        assert_eq!(draft.title, "Pancakes");
        assert_eq!(draft.ingredients.len(), 1);
    }

    #[test]
    fn validate_rejects_empty_title() {
        let mut draft = valid_draft();
        draft.title = "   ".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn validate_rejects_empty_summary() {
        let mut draft = valid_draft();
        draft.summary = String::new();
        assert_eq!(draft.validate(), Err(ValidationError::MissingSummary));
    }

    #[test]
    fn validate_drops_blank_ingredient_rows() {
        let draft = valid_draft()
            .with_ingredient(Ingredient::new("  ", 1.0, ""))
            .with_ingredient(Ingredient::new(" milk ", 1.5, " cups "))
            .validate()
            .unwrap();
        let names: Vec<_> = draft.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["flour", "milk"]);
        assert_eq!(draft.ingredients[1].unit, "cups");
    }

    #[test]
    fn validate_rejects_only_blank_ingredients() {
        let draft = RecipeDraft::new("Toast", "Bread, toasted")
            .with_ingredient(Ingredient::new("", 1.0, "slice"));
        assert_eq!(draft.validate(), Err(ValidationError::NoIngredients));
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let draft = valid_draft().with_ingredient(Ingredient::new("sugar", -1.0, "tbsp"));
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidAmount("sugar".into()))
        );
    }

    #[test]
    fn validate_rejects_zero_servings_and_ready_time() {
        let mut draft = valid_draft();
        draft.servings = 0;
        assert_eq!(draft.validate(), Err(ValidationError::InvalidServings));

        let mut draft = valid_draft();
        draft.ready_in_minutes = Some(0);
        assert_eq!(draft.validate(), Err(ValidationError::InvalidReadyTime));
    }

    #[test]
    fn validate_normalizes_tags_and_optionals() {
        let mut draft = valid_draft();
        draft.diets = vec!["Vegan".into(), "vegan ".into(), "KETO".into()];
        draft.cuisines = vec!["Thai".into()];
        draft.image = Some("  ".into());
        draft.instructions = Some(" 1. Mix. ".into());

        let draft = draft.validate().unwrap();
        assert_eq!(draft.diets, vec!["vegan", "keto"]);
        assert_eq!(draft.cuisines, vec!["thai"]);
        assert_eq!(draft.image, None);
        assert_eq!(draft.instructions.as_deref(), Some("1. Mix."));
    }

    #[test]
    fn into_recipe_marks_user_submitted() {
        let recipe = valid_draft().into_recipe("user-1".into()).unwrap();
        assert_eq!(recipe.id, "user-1");
        assert!(recipe.user_submitted);
        assert!(!recipe.favorite);
    }

    #[test]
    fn generated_ids_are_unique_and_prefixed() {
        let a = generate_recipe_id();
        let b = generate_recipe_id();
        assert!(a.starts_with("user-"));
        assert_ne!(a, b);
    }

    #[test]
    fn instruction_steps_split_on_numbered_markers() {
        let steps = instruction_steps("1. Heat oil in a pot. 2. Add onions. 3. Simmer.");
        assert_eq!(steps, vec!["Heat oil in a pot.", "Add onions.", "Simmer."]);
    }

    #[test]
    fn instruction_steps_without_markers_is_single_step() {
        assert_eq!(instruction_steps("Just mix it."), vec!["Just mix it."]);
        assert!(instruction_steps("   ").is_empty());
    }

    #[test]
    fn deserializes_browser_shaped_json() {
        let json = r#"{
            "id": "7",
            "title": "Soup",
            "image": "",
            "servings": 2,
            "summary": "Warm soup",
            "ingredients": [{ "id": 3, "name": "water", "amount": 1, "unit": "l" }],
            "favorite": true
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.image, None);
        assert!(recipe.diets.is_empty());
        assert_eq!(recipe.ingredients[0].id, Some(3));
        assert!(recipe.favorite);
        assert!(!recipe.user_submitted);
        assert_eq!(recipe.image_or(PLACEHOLDER_IMAGE), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let mut recipe = valid_draft().into_recipe("user-1".into()).unwrap();
        recipe.ready_in_minutes = Some(15);
        let json = serde_json::to_string(&recipe).unwrap();
        assert!(json.contains("\"readyInMinutes\":15"));
        assert!(json.contains("\"userSubmitted\":true"));
        assert!(json.contains("\"dishTypes\":[]"));
        assert!(!json.contains("sourceUrl"));
    }
}
