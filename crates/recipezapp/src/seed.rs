//! The catalog a fresh installation starts with.
//!
//! Used only when the `recipes` key was never written. Once any catalog has been
//! saved (even an empty one) the seed is not consulted again.

use crate::model::{Ingredient, Recipe};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn ingredients(rows: &[(&str, f64, &str)]) -> Vec<Ingredient> {
    rows.iter()
        .map(|(name, amount, unit)| Ingredient::new(*name, *amount, *unit))
        .collect()
}

struct Seed {
    id: &'static str,
    title: &'static str,
    image: &'static str,
    servings: u32,
    minutes: u32,
    summary: &'static str,
    cuisines: &'static [&'static str],
    diets: &'static [&'static str],
    dish_types: &'static [&'static str],
    instructions: &'static str,
    ingredients: &'static [(&'static str, f64, &'static str)],
}

impl Seed {
    fn into_recipe(self) -> Recipe {
        Recipe {
            id: self.id.to_string(),
            title: self.title.to_string(),
            image: Some(self.image.to_string()),
            servings: self.servings,
            ready_in_minutes: Some(self.minutes),
            source_url: None,
            summary: self.summary.to_string(),
            cuisines: tags(self.cuisines),
            diets: tags(self.diets),
            dish_types: tags(self.dish_types),
            instructions: Some(self.instructions.to_string()),
            ingredients: ingredients(self.ingredients),
            favorite: false,
            user_submitted: false,
        }
    }
}

pub fn seed_recipes() -> Vec<Recipe> {
    let seeds = [
        Seed {
            id: "1",
            title: "Vegetable Curry",
            image: "https://images.unsplash.com/photo-1565557623262-b51c2513a641?q=80&w=500",
            servings: 4,
            minutes: 45,
            summary: "A flavorful vegetable curry with coconut milk and aromatic spices.",
            cuisines: &["indian", "asian"],
            diets: &["vegetarian", "vegan"],
            dish_types: &["main course", "dinner"],
            instructions: "1. Heat oil in a pot. 2. Add onions and sauté until translucent. \
                3. Add spices and cook until fragrant. 4. Add vegetables and coconut milk. \
                5. Simmer until vegetables are tender.",
            ingredients: &[
                ("coconut oil", 2.0, "tbsp"),
                ("onion", 1.0, "large"),
                ("curry powder", 2.0, "tbsp"),
                ("mixed vegetables", 4.0, "cups"),
                ("coconut milk", 1.0, "can"),
            ],
        },
        Seed {
            id: "2",
            title: "Grilled Chicken Salad",
            image: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?q=80&w=500",
            servings: 2,
            minutes: 30,
            summary: "A healthy grilled chicken salad with mixed greens and a light vinaigrette.",
            cuisines: &["american", "mediterranean"],
            diets: &["high-protein", "low-carb"],
            dish_types: &["salad", "lunch"],
            instructions: "1. Season chicken breasts with salt and pepper. \
                2. Grill until cooked through. 3. Slice chicken. \
                4. Toss with mixed greens and vegetables. 5. Drizzle with vinaigrette.",
            ingredients: &[
                ("chicken breasts", 2.0, "pieces"),
                ("mixed greens", 4.0, "cups"),
                ("cherry tomatoes", 1.0, "cup"),
                ("cucumber", 1.0, "medium"),
                ("olive oil vinaigrette", 3.0, "tbsp"),
            ],
        },
        Seed {
            id: "3",
            title: "Chocolate Chip Cookies",
            image: "https://images.unsplash.com/photo-1499636136210-6f4ee915583e?q=80&w=500",
            servings: 24,
            minutes: 40,
            summary: "Classic homemade chocolate chip cookies that are soft in the center \
                and crispy around the edges.",
            cuisines: &["american"],
            diets: &["vegetarian"],
            dish_types: &["dessert", "snack"],
            instructions: "1. Preheat oven to 350°F. 2. Cream butter and sugars. \
                3. Add eggs and vanilla. 4. Mix in dry ingredients. 5. Fold in chocolate chips. \
                6. Drop spoonfuls onto baking sheet. 7. Bake for 10-12 minutes.",
            ingredients: &[
                ("butter", 1.0, "cup"),
                ("brown sugar", 1.0, "cup"),
                ("granulated sugar", 0.5, "cup"),
                ("eggs", 2.0, "large"),
                ("vanilla extract", 2.0, "tsp"),
                ("all-purpose flour", 2.75, "cups"),
                ("chocolate chips", 2.0, "cups"),
            ],
        },
        Seed {
            id: "4",
            title: "Spaghetti Bolognese",
            image: "https://images.unsplash.com/photo-1551892374-ecf8754cf8b0?q=80&w=500",
            servings: 6,
            minutes: 60,
            summary: "A classic Italian pasta dish with a rich and flavorful meat sauce.",
            cuisines: &["italian", "mediterranean"],
            diets: &[],
            dish_types: &["main course", "dinner"],
            instructions: "1. Brown ground beef in a large pot. \
                2. Add onions, carrots, and celery and cook until softened. \
                3. Add garlic and cook until fragrant. \
                4. Add tomato paste, diced tomatoes, and seasonings. 5. Simmer for 30 minutes. \
                6. Cook spaghetti according to package directions. \
                7. Serve sauce over pasta with grated Parmesan.",
            ingredients: &[
                ("ground beef", 1.0, "pound"),
                ("onion", 1.0, "medium"),
                ("carrots", 2.0, "medium"),
                ("celery", 2.0, "stalks"),
                ("garlic", 3.0, "cloves"),
                ("tomato paste", 2.0, "tbsp"),
                ("diced tomatoes", 28.0, "oz"),
                ("spaghetti", 1.0, "pound"),
            ],
        },
        Seed {
            id: "5",
            title: "Avocado Toast",
            image: "https://images.unsplash.com/photo-1541519227354-08fa5d50c44d?q=80&w=500",
            servings: 1,
            minutes: 10,
            summary: "A simple and nutritious breakfast or snack with mashed avocado on toast.",
            cuisines: &["american", "california"],
            diets: &["vegetarian", "vegan"],
            dish_types: &["breakfast", "snack"],
            instructions: "1. Toast bread until golden brown. 2. Mash avocado with a fork. \
                3. Mix in salt, pepper, and lemon juice. 4. Spread avocado mixture on toast. \
                5. Top with optional ingredients like red pepper flakes, microgreens, \
                or a poached egg.",
            ingredients: &[
                ("bread", 2.0, "slices"),
                ("avocado", 1.0, "ripe"),
                ("lemon juice", 1.0, "tsp"),
                ("salt", 0.25, "tsp"),
                ("black pepper", 0.125, "tsp"),
            ],
        },
    ];

    seeds.into_iter().map(Seed::into_recipe).collect()
}
