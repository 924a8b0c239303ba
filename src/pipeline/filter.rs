use crate::model::{Difficulty, Recipe};
use crate::query::Filter;
use std::collections::BTreeSet;

/// Recipes strictly under this many minutes count as quick
pub const QUICK_MAX_MINUTES: u32 = 30;

pub fn matches_filter(recipe: &Recipe, filter: Filter, favorites: &BTreeSet<u32>) -> bool {
    match filter {
        Filter::All => true,
        Filter::Easy => recipe.difficulty == Difficulty::Easy,
        Filter::Medium => recipe.difficulty == Difficulty::Medium,
        Filter::Hard => recipe.difficulty == Difficulty::Hard,
        Filter::Quick => recipe.time < QUICK_MAX_MINUTES,
        Filter::Favorites => favorites.contains(&recipe.id),
    }
}

pub fn apply_filter<'a>(
    recipes: Vec<&'a Recipe>,
    filter: Filter,
    favorites: &BTreeSet<u32>,
) -> Vec<&'a Recipe> {
    if filter == Filter::All {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|recipe| matches_filter(recipe, filter, favorites))
        .collect()
}
