//! # Filter Engine
//!
//! The filtered view of the catalog is a pure function of the catalog and three
//! independent criteria held in [`FilterCriteria`]:
//!
//! | Criterion | Within | Across |
//! |-----------|--------|--------|
//! | diets     | OR     | AND    |
//! | cuisines  | OR     | AND    |
//! | query     | substring of title, summary or any ingredient name | AND |
//!
//! All comparisons are case-insensitive and the output keeps catalog order.
//!
//! Once a diet (or cuisine) filter is active, recipes without any diet (or cuisine)
//! tags are excluded: an untagged recipe never matches a tag filter.
//!
//! Criteria change through [`FilterUpdate`], a tagged variant covering the three
//! kinds of change a presentation layer can request.

use crate::model::Recipe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Diet tags offered by the filter and submission forms.
pub const DIET_OPTIONS: [&str; 8] = [
    "vegetarian",
    "vegan",
    "gluten-free",
    "dairy-free",
    "keto",
    "paleo",
    "low-carb",
    "high-protein",
];

/// Cuisine tags offered by the filter and submission forms.
pub const CUISINE_OPTIONS: [&str; 10] = [
    "italian",
    "mexican",
    "american",
    "indian",
    "chinese",
    "japanese",
    "thai",
    "mediterranean",
    "french",
    "greek",
];

/// The active filter criteria. Tags are stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub diets: BTreeSet<String>,
    pub cuisines: BTreeSet<String>,
    pub query: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn with_diet(mut self, tag: &str) -> Self {
        self.apply(FilterUpdate::Diet {
            tag: tag.to_string(),
            selected: true,
        });
        self
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn with_cuisine(mut self, tag: &str) -> Self {
        self.apply(FilterUpdate::Cuisine {
            tag: tag.to_string(),
            selected: true,
        });
        self
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn with_query(mut self, query: &str) -> Self {
        self.apply(FilterUpdate::Query(query.to_string()));
        self
    }

    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Diet { tag, selected } => toggle_tag(&mut self.diets, &tag, selected),
            FilterUpdate::Cuisine { tag, selected } => {
                toggle_tag(&mut self.cuisines, &tag, selected)
            }
            FilterUpdate::Query(query) => self.query = query,
        }
    }

    pub fn clear(&mut self) {
        self.diets.clear();
        self.cuisines.clear();
        self.query.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.diets.is_empty() || !self.cuisines.is_empty() || !self.query.is_empty()
    }

    /// Check a single recipe against all criteria.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.diets.is_empty() && !any_tag_selected(&recipe.diets, &self.diets) {
            return false;
        }
        if !self.cuisines.is_empty() && !any_tag_selected(&recipe.cuisines, &self.cuisines) {
            return false;
        }

        if self.query.is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        recipe.title.to_lowercase().contains(&query)
            || recipe.summary.to_lowercase().contains(&query)
            || recipe
                .ingredients
                .iter()
                .any(|ing| ing.name.to_lowercase().contains(&query))
    }
}

fn toggle_tag(set: &mut BTreeSet<String>, tag: &str, selected: bool) {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        return;
    }
    if selected {
        set.insert(tag);
    } else {
        set.remove(&tag);
    }
}

fn any_tag_selected(tags: &[String], selected: &BTreeSet<String>) -> bool {
    tags.iter()
        .any(|tag| selected.contains(&tag.trim().to_lowercase()))
}

/// Derive the filtered view. Stable: output preserves catalog order.
pub fn filter_recipes(catalog: &[Recipe], criteria: &FilterCriteria) -> Vec<Recipe> {
    catalog
        .iter()
        .filter(|recipe| criteria.matches(recipe))
        .cloned()
        .collect()
}

/// Which criterion a [`FilterUpdate`] targets, as named by presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Diet,
    Cuisine,
    Query,
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diet" => Ok(FilterKind::Diet),
            "cuisine" => Ok(FilterKind::Cuisine),
            "query" => Ok(FilterKind::Query),
            other => Err(format!("unknown filter type: {}", other)),
        }
    }
}

/// A change to the filter criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    /// Add (`selected`) or remove a diet tag.
    Diet { tag: String, selected: bool },
    /// Add (`selected`) or remove a cuisine tag.
    Cuisine { tag: String, selected: bool },
    /// Replace the search query wholesale.
    Query(String),
}

impl FilterUpdate {
    /// Build an update from the loose `(type, value, selected)` triple.
    /// `selected` is ignored for queries.
    pub fn from_parts(kind: FilterKind, value: impl Into<String>, selected: bool) -> Self {
        let value = value.into();
        match kind {
            FilterKind::Diet => FilterUpdate::Diet {
                tag: value,
                selected,
            },
            FilterKind::Cuisine => FilterUpdate::Cuisine {
                tag: value,
                selected,
            },
            FilterKind::Query => FilterUpdate::Query(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::recipe;

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    fn abc() -> Vec<Recipe> {
        vec![
            recipe("A").diets(&["vegetarian"]).build(),
            recipe("B").diets(&["vegan", "keto"]).build(),
            recipe("C").build(),
        ]
    }

    #[test]
    fn diet_filter_keeps_matching_recipes_only() {
        let criteria = FilterCriteria::new().with_diet("vegetarian");
        assert_eq!(ids(&filter_recipes(&abc(), &criteria)), vec!["A"]);
    }

    #[test]
    fn no_criteria_returns_whole_catalog() {
        let catalog = abc();
        assert_eq!(
            ids(&filter_recipes(&catalog, &FilterCriteria::new())),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn diets_are_or_within_category() {
        let criteria = FilterCriteria::new()
            .with_diet("vegetarian")
            .with_diet("keto");
        assert_eq!(ids(&filter_recipes(&abc(), &criteria)), vec!["A", "B"]);
    }

    #[test]
    fn untagged_recipes_are_excluded_once_tag_filter_is_active() {
        let catalog = vec![
            recipe("tagged").cuisines(&["italian"]).build(),
            recipe("untagged").build(),
        ];
        let criteria = FilterCriteria::new().with_cuisine("italian");
        assert_eq!(ids(&filter_recipes(&catalog, &criteria)), vec!["tagged"]);
    }

    #[test]
    fn categories_compose_with_and() {
        let catalog = vec![
            recipe("veg-italian")
                .diets(&["vegetarian"])
                .cuisines(&["italian"])
                .build(),
            recipe("veg-thai")
                .diets(&["vegetarian"])
                .cuisines(&["thai"])
                .build(),
            recipe("meat-italian").cuisines(&["italian"]).build(),
        ];
        let criteria = FilterCriteria::new()
            .with_diet("vegetarian")
            .with_cuisine("italian");
        assert_eq!(ids(&filter_recipes(&catalog, &criteria)), vec!["veg-italian"]);
    }

    #[test]
    fn tag_comparison_is_case_insensitive() {
        let catalog = vec![recipe("A").diets(&["Vegetarian"]).build()];
        let criteria = FilterCriteria::new().with_diet("VEGETARIAN");
        assert_eq!(ids(&filter_recipes(&catalog, &criteria)), vec!["A"]);
    }

    #[test]
    fn query_matches_title_summary_and_ingredients() {
        let catalog = vec![
            recipe("toast")
                .title("Avocado Toast")
                .ingredient("bread")
                .build(),
            recipe("guac")
                .title("Guacamole")
                .ingredient("avocado")
                .build(),
            recipe("soup")
                .title("Soup")
                .summary("Goes well with toast")
                .build(),
            recipe("salad").title("Salad").build(),
        ];

        let avocado = FilterCriteria::new().with_query("avocado");
        assert_eq!(
            ids(&filter_recipes(&catalog, &avocado)),
            vec!["toast", "guac"]
        );

        let toast = FilterCriteria::new().with_query("TOAST");
        assert_eq!(ids(&filter_recipes(&catalog, &toast)), vec!["toast", "soup"]);
    }

    #[test]
    fn empty_query_is_no_constraint() {
        let criteria = FilterCriteria::new().with_query("");
        assert_eq!(filter_recipes(&abc(), &criteria).len(), 3);
        assert!(!criteria.has_active_filters());
    }

    #[test]
    fn whitespace_in_query_is_matched_literally() {
        let catalog = vec![
            recipe("soup").title("Soup").summary("Hearty").ingredient("water").build(),
            recipe("boil").title("Boiled Eggs").summary("Hearty").ingredient("eggs").build(),
            recipe("curry").title("Curry").summary("Hearty").ingredient("coconut oil").build(),
        ];

        let space = FilterCriteria::new().with_query(" ");
        assert!(space.has_active_filters());
        assert_eq!(ids(&filter_recipes(&catalog, &space)), vec!["boil", "curry"]);

        let leading = FilterCriteria::new().with_query(" oil");
        assert_eq!(ids(&filter_recipes(&catalog, &leading)), vec!["curry"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = abc();
        let criteria = FilterCriteria::new().with_diet("vegan").with_query("b");
        let first = filter_recipes(&catalog, &criteria);
        let second = filter_recipes(&catalog, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn deselecting_a_tag_removes_it() {
        let mut criteria = FilterCriteria::new().with_diet("vegan");
        criteria.apply(FilterUpdate::Diet {
            tag: "Vegan".into(),
            selected: false,
        });
        assert!(criteria.diets.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut criteria = FilterCriteria::new()
            .with_diet("vegan")
            .with_cuisine("thai")
            .with_query("curry");
        assert!(criteria.has_active_filters());
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn filter_kind_parses_known_names() {
        assert_eq!("diet".parse::<FilterKind>(), Ok(FilterKind::Diet));
        assert_eq!("Cuisine".parse::<FilterKind>(), Ok(FilterKind::Cuisine));
        assert_eq!("query".parse::<FilterKind>(), Ok(FilterKind::Query));
        assert!("price".parse::<FilterKind>().is_err());
    }

    #[test]
    fn from_parts_ignores_selected_for_queries() {
        assert_eq!(
            FilterUpdate::from_parts(FilterKind::Query, "pasta", false),
            FilterUpdate::Query("pasta".into())
        );
        assert_eq!(
            FilterUpdate::from_parts(FilterKind::Diet, "keto", true),
            FilterUpdate::Diet {
                tag: "keto".into(),
                selected: true
            }
        );
    }
}
