use crate::error::FinderError;
use crate::model::{Difficulty, Recipe, Step};
use log::debug;
use std::collections::HashSet;
use std::path::Path;

/// Immutable, validated list of recipes.
///
/// Ids are unique, titles are non-blank and times are positive. Nothing can
/// reorder or mutate the recipes once the store is built.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, FinderError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if recipe.id == 0 {
                return Err(FinderError::InvalidRecipe(format!(
                    "'{}' has id 0, ids must be positive",
                    recipe.title
                )));
            }
            if !seen.insert(recipe.id) {
                return Err(FinderError::InvalidRecipe(format!(
                    "duplicate id {}",
                    recipe.id
                )));
            }
            if recipe.title.trim().is_empty() {
                return Err(FinderError::InvalidRecipe(format!(
                    "recipe {} has an empty title",
                    recipe.id
                )));
            }
            if recipe.time == 0 {
                return Err(FinderError::InvalidRecipe(format!(
                    "'{}' has a time of 0 minutes",
                    recipe.title
                )));
            }
        }

        Ok(Self { recipes })
    }

    /// Parse a JSON array of recipes
    pub fn from_json_str(json: &str) -> Result<Self, FinderError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    pub fn from_path(path: &Path) -> Result<Self, FinderError> {
        debug!("Loading recipes from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The catalogue the app ships with
    pub fn builtin() -> Self {
        Self {
            recipes: builtin_recipes(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: u32,
    title: &str,
    time: u32,
    difficulty: Difficulty,
    description: &str,
    category: &str,
    ingredients: &[&str],
    steps: Vec<Step>,
) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        difficulty,
        time,
        description: description.to_string(),
        category: category.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        steps,
    }
}

fn builtin_recipes() -> Vec<Recipe> {
    use Difficulty::{Easy, Hard, Medium};

    vec![
        recipe(
            1,
            "Classic Spaghetti Carbonara",
            25,
            Easy,
            "A creamy Italian pasta dish made with eggs, cheese, pancetta, and black pepper.",
            "pasta",
            &["spaghetti", "eggs", "pecorino romano", "pancetta", "black pepper"],
            vec![
                Step::text("Bring a large pot of salted water to a boil"),
                Step::group(
                    "Cook the pasta",
                    vec![
                        Step::text("Add the spaghetti"),
                        Step::text("Stir occasionally"),
                        Step::text("Drain, reserving a cup of pasta water"),
                    ],
                ),
                Step::text("Crisp the pancetta in a wide pan"),
                Step::text("Whisk eggs with grated cheese and pepper"),
                Step::text("Toss everything off the heat, loosening with pasta water"),
            ],
        ),
        recipe(
            2,
            "Chicken Tikka Masala",
            45,
            Medium,
            "Tender chicken pieces in a creamy, spiced tomato sauce.",
            "curry",
            &["chicken thighs", "yogurt", "garam masala", "tomato passata", "cream", "onion"],
            vec![
                Step::group(
                    "Marinate the chicken",
                    vec![
                        Step::text("Cut chicken into chunks"),
                        Step::text("Coat with yogurt and half the spices"),
                    ],
                ),
                Step::text("Grill the chicken until charred"),
                Step::group(
                    "Make the sauce",
                    vec![
                        Step::text("Soften the onion"),
                        Step::text("Add the remaining spices and passata"),
                        Step::text("Simmer for 15 minutes, then stir in the cream"),
                    ],
                ),
                Step::text("Add the chicken to the sauce and heat through"),
            ],
        ),
        recipe(
            3,
            "Homemade Croissants",
            180,
            Hard,
            "Buttery, flaky French pastries that require patience but deliver amazing results.",
            "baking",
            &["bread flour", "butter", "milk", "sugar", "yeast", "salt"],
            vec![
                Step::text("Mix the dough and chill it for an hour"),
                Step::group(
                    "Laminate the dough",
                    vec![
                        Step::text("Enclose the butter block in the dough"),
                        Step::group(
                            "Fold three times",
                            vec![
                                Step::text("Roll into a long rectangle"),
                                Step::text("Fold in thirds"),
                                Step::text("Chill for 30 minutes"),
                            ],
                        ),
                    ],
                ),
                Step::text("Cut triangles and roll them up"),
                Step::text("Proof until doubled"),
                Step::text("Bake at 200°C for 18 minutes"),
            ],
        ),
        recipe(
            4,
            "Greek Salad",
            15,
            Easy,
            "Fresh vegetables, feta cheese, and olives tossed in olive oil and herbs.",
            "salad",
            &["tomatoes", "cucumber", "red onion", "feta", "kalamata olives", "olive oil", "oregano"],
            vec![
                Step::text("Chop the vegetables into bite-sized pieces"),
                Step::text("Add olives and a slab of feta"),
                Step::text("Dress with olive oil and oregano"),
            ],
        ),
        recipe(
            5,
            "Beef Wellington",
            120,
            Hard,
            "Tender beef fillet coated with mushroom duxelles and wrapped in puff pastry.",
            "meat",
            &["beef fillet", "mushrooms", "prosciutto", "puff pastry", "egg yolk", "mustard"],
            vec![
                Step::text("Sear the fillet and brush with mustard"),
                Step::text("Cook the mushrooms down to a dry duxelles"),
                Step::group(
                    "Wrap the beef",
                    vec![
                        Step::text("Lay out prosciutto and spread the duxelles"),
                        Step::text("Roll the fillet tightly and chill"),
                        Step::text("Encase in puff pastry and glaze with egg yolk"),
                    ],
                ),
                Step::text("Bake at 200°C for 40 minutes and rest before slicing"),
            ],
        ),
        recipe(
            6,
            "Vegetable Stir Fry",
            20,
            Easy,
            "Colorful mixed vegetables cooked quickly in a savory sauce.",
            "vegetarian",
            &["broccoli", "bell pepper", "carrot", "snap peas", "soy sauce", "garlic", "ginger"],
            vec![
                Step::text("Slice all vegetables thinly"),
                Step::text("Stir fry garlic and ginger in a hot wok"),
                Step::text("Add vegetables, hardest first"),
                Step::text("Finish with soy sauce"),
            ],
        ),
        recipe(
            7,
            "Pad Thai",
            30,
            Medium,
            "Thai stir-fried rice noodles with shrimp, peanuts, and tangy tamarind sauce.",
            "noodles",
            &["rice noodles", "shrimp", "peanuts", "tamarind paste", "fish sauce", "bean sprouts", "egg"],
            vec![
                Step::text("Soak the rice noodles"),
                Step::text("Mix tamarind, fish sauce and sugar"),
                Step::group(
                    "Stir fry",
                    vec![
                        Step::text("Cook the shrimp"),
                        Step::text("Scramble the egg"),
                        Step::text("Add noodles and sauce"),
                    ],
                ),
                Step::text("Top with peanuts and bean sprouts"),
            ],
        ),
        recipe(
            8,
            "Margherita Pizza",
            60,
            Medium,
            "Classic Italian pizza with fresh mozzarella, tomatoes, and basil.",
            "pizza",
            &["pizza dough", "tomatoes", "fresh mozzarella", "basil", "olive oil"],
            vec![
                Step::text("Stretch the dough"),
                Step::text("Spread crushed tomatoes"),
                Step::text("Add torn mozzarella"),
                Step::text("Bake as hot as the oven goes"),
                Step::text("Finish with basil and olive oil"),
            ],
        ),
    ]
}
