//! Derives the displayed recipes from the store and the current query.
//!
//! The order is fixed: search, then filter, then sort.

mod filter;
mod search;
mod sort;

pub use filter::{apply_filter, matches_filter, QUICK_MAX_MINUTES};
pub use search::{apply_search, matches_search};
pub use sort::{apply_sort, compare_titles};

use crate::model::Recipe;
use crate::query::QueryState;
use crate::store::RecipeStore;

/// Recipes to display for `state`, in display order
pub fn view<'a>(store: &'a RecipeStore, state: &QueryState) -> Vec<&'a Recipe> {
    let recipes = store.recipes().iter().collect();
    let recipes = apply_search(recipes, state.search_query());
    let recipes = apply_filter(recipes, state.filter, state.favorites());
    apply_sort(recipes, state.sort)
}
