use std::time::Duration;

use crate::app::RecipeApp;
use crate::config::AppConfig;
use crate::debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
use crate::error::FinderError;
use crate::favorites::{load_favorites, FileStore, KeyValueStore, MemoryStore, FAVORITES_KEY};
use crate::query::{Filter, QueryState, SortOrder};
use crate::store::RecipeStore;

/// Builder for configuring a [`RecipeApp`]
#[derive(Default)]
pub struct RecipeAppBuilder {
    store: Option<RecipeStore>,
    storage: Option<Box<dyn KeyValueStore>>,
    storage_key: Option<String>,
    quiet_period: Option<Duration>,
    filter: Filter,
    sort: SortOrder,
    search: Option<String>,
}

impl RecipeAppBuilder {
    /// Use `store` instead of the built-in catalogue
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{RecipeApp, RecipeStore};
    ///
    /// let store = RecipeStore::from_json_str(
    ///     r#"[{"id": 1, "title": "Toast", "difficulty": "easy", "time": 5}]"#,
    /// ).unwrap();
    /// let app = RecipeApp::builder().store(store).build();
    /// assert_eq!(app.store().len(), 1);
    /// ```
    pub fn store(mut self, store: RecipeStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Persist favorites in `storage`; in memory only when not set
    pub fn storage(mut self, storage: impl KeyValueStore + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Key the favorites are stored under
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// How long search input has to be quiet before it is applied
    pub fn search_debounce(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = Some(quiet_period);
        self
    }

    /// Start with a filter other than [`Filter::All`]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Start with a sort order other than catalogue order
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Start with search text already applied
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Apply storage, catalogue and debounce settings from `config`.
    ///
    /// # Errors
    /// Returns `FinderError` if the configured recipe file cannot be loaded.
    pub fn config(mut self, config: &AppConfig) -> Result<Self, FinderError> {
        if let Some(path) = &config.recipes_path {
            self.store = Some(RecipeStore::from_path(path)?);
        }
        self.storage = Some(Box::new(FileStore::new(&config.storage_path)));
        self.storage_key = Some(config.storage_key.clone());
        self.quiet_period = Some(config.search_debounce());
        Ok(self)
    }

    /// Build the app, loading favorites from storage.
    ///
    /// Unreadable favorites start out empty.
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{Filter, RecipeApp};
    ///
    /// let app = RecipeApp::builder().filter(Filter::Quick).build();
    /// assert_eq!(app.view().summary(), "Showing 3 of 8 recipes");
    /// ```
    pub fn build(self) -> RecipeApp {
        let store = self.store.unwrap_or_default();
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(MemoryStore::new()));
        let storage_key = self
            .storage_key
            .unwrap_or_else(|| FAVORITES_KEY.to_string());

        let mut state = QueryState::with_favorites(load_favorites(storage.as_ref(), &storage_key));
        state.filter = self.filter;
        state.sort = self.sort;
        if let Some(query) = &self.search {
            state.set_search_query(query);
        }

        RecipeApp::from_parts(
            store,
            state,
            storage,
            storage_key,
            Debouncer::new(self.quiet_period.unwrap_or(DEFAULT_QUIET_PERIOD)),
        )
    }
}
