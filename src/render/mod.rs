mod card;
mod steps;
mod text;

pub use card::{render_card, render_recipe_list};
pub use steps::{render_steps, OutlineItem, StepOutline};
pub use text::{render_text_card, render_text_line};

use crate::model::Recipe;
use crate::query::QueryState;
use std::collections::BTreeSet;

/// Result of one display recomputation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Markup for the full current recipe list
    pub markup: String,
    /// Ids of the displayed recipes, in display order
    pub ids: Vec<u32>,
    /// Favorites at the time the view was computed
    pub favorites: BTreeSet<u32>,
    /// Size of the whole store
    pub total: usize,
}

impl View {
    pub fn new(recipes: &[&Recipe], state: &QueryState, total: usize) -> Self {
        Self {
            markup: render_recipe_list(recipes, state.favorites()),
            ids: recipes.iter().map(|r| r.id).collect(),
            favorites: state.favorites().clone(),
            total,
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    pub fn shown(&self) -> usize {
        self.ids.len()
    }

    /// "Showing K of N recipes"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} recipes", self.shown(), self.total)
    }
}
