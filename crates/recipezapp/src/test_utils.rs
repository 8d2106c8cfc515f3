use crate::model::{Ingredient, Recipe, RecipeDraft};

/// Start building a catalog recipe with the given id.
pub fn recipe(id: &str) -> RecipeBuilder {
    RecipeBuilder {
        recipe: Recipe {
            id: id.to_string(),
            title: id.to_string(),
            image: None,
            servings: 2,
            ready_in_minutes: None,
            source_url: None,
            summary: "A dish for testing".to_string(),
            cuisines: Vec::new(),
            diets: Vec::new(),
            dish_types: Vec::new(),
            instructions: None,
            ingredients: Vec::new(),
            favorite: false,
            user_submitted: false,
        },
    }
}

pub struct RecipeBuilder {
    recipe: Recipe,
}

impl RecipeBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.recipe.title = title.to_string();
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.recipe.summary = summary.to_string();
        self
    }

    pub fn diets(mut self, diets: &[&str]) -> Self {
        self.recipe.diets = diets.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn cuisines(mut self, cuisines: &[&str]) -> Self {
        self.recipe.cuisines = cuisines.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn ingredient(mut self, name: &str) -> Self {
        self.recipe.ingredients.push(Ingredient::new(name, 1.0, ""));
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.recipe.favorite = favorite;
        self
    }

    pub fn build(mut self) -> Recipe {
        if self.recipe.ingredients.is_empty() {
            self.recipe.ingredients.push(Ingredient::new("water", 1.0, "cup"));
        }
        self.recipe
    }
}

/// A draft that passes validation.
pub fn valid_draft(title: &str) -> RecipeDraft {
    RecipeDraft::new(title, format!("{} for dinner", title))
        .with_ingredient(Ingredient::new("flour", 2.0, "cups"))
}
