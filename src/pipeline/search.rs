use crate::model::Recipe;

/// Whether `recipe` matches an already normalized (lowercase) query.
///
/// The title or any ingredient has to contain the query. An empty query
/// matches everything.
pub fn matches_search(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    recipe.title.to_lowercase().contains(query)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(query))
}

pub fn apply_search<'a>(recipes: Vec<&'a Recipe>, query: &str) -> Vec<&'a Recipe> {
    if query.is_empty() {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|recipe| matches_search(recipe, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: 1,
            title: title.to_string(),
            difficulty: Difficulty::Easy,
            time: 10,
            description: "mentions rice".to_string(),
            category: String::new(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            steps: Vec::new(),
        }
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        assert!(matches_search(&recipe("Fried Rice", &[]), "rice"));
        assert!(matches_search(&recipe("Fried Rice", &[]), "fried r"));
    }

    #[test]
    fn test_matches_ingredient_as_stored() {
        let r = recipe("Pad Thai", &["Rice Noodles", "peanuts"]);
        assert!(matches_search(&r, "noodles"));
        assert!(matches_search(&r, "peanut"));
    }

    #[test]
    fn test_description_is_not_searched() {
        assert!(!matches_search(&recipe("Salad", &["lettuce"]), "rice"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_search(&recipe("Salad", &[]), ""));
    }
}
