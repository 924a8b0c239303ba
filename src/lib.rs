//! Browse a recipe catalogue: search, filter, sort and favorite recipes, and
//! render the result as HTML cards or plain text.
//!
//! ```
//! use recipe_finder::{Filter, QueryState, RecipeStore, SortOrder};
//!
//! let store = RecipeStore::builtin();
//! let mut state = QueryState::new();
//! state.filter = Filter::Easy;
//! state.sort = SortOrder::Time;
//!
//! let view = recipe_finder::render_view(&store, &state);
//! assert_eq!(view.summary(), "Showing 3 of 8 recipes");
//! ```

pub mod app;
pub mod builder;
pub mod config;
pub mod debounce;
pub mod error;
pub mod favorites;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod render;
pub mod store;

pub use app::{InputEvent, RecipeApp, RenderTarget};
pub use builder::RecipeAppBuilder;
pub use config::AppConfig;
pub use debounce::Debouncer;
pub use error::FinderError;
pub use favorites::{FileStore, KeyValueStore, MemoryStore};
pub use model::{Difficulty, Recipe, Step};
pub use query::{Filter, QueryState, SortOrder};
pub use render::View;
pub use store::RecipeStore;

/// Recipes matching `state`, in display order
pub fn view_recipes<'a>(store: &'a RecipeStore, state: &QueryState) -> Vec<&'a Recipe> {
    pipeline::view(store, state)
}

/// Markup and counts for the recipes matching `state`
pub fn render_view(store: &RecipeStore, state: &QueryState) -> View {
    View::new(&pipeline::view(store, state), state, store.len())
}
