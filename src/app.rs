use crate::builder::RecipeAppBuilder;
use crate::debounce::Debouncer;
use crate::error::FinderError;
use crate::favorites::{save_favorites, KeyValueStore};
use crate::model::Recipe;
use crate::pipeline;
use crate::query::{Filter, QueryState, SortOrder};
use crate::render::View;
use crate::store::RecipeStore;
use log::{debug, info, warn};
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

/// Something the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Filter(Filter),
    Sort(SortOrder),
    /// Raw search text as typed; applied after the quiet period
    Search(String),
    ToggleFavorite(u32),
}

impl FromStr for InputEvent {
    type Err = FinderError;

    /// Parse a command line such as `filter quick`, `sort name`,
    /// `search rice` or `fav 3`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match command.to_lowercase().as_str() {
            "filter" | "f" => Ok(InputEvent::Filter(Filter::from(rest))),
            "sort" | "s" => Ok(InputEvent::Sort(SortOrder::from(rest))),
            "search" | "/" => Ok(InputEvent::Search(rest.to_string())),
            "fav" | "favorite" | "toggle" => rest
                .parse()
                .map(InputEvent::ToggleFavorite)
                .map_err(|_| FinderError::UnknownCommand(format!("invalid recipe id '{}'", rest))),
            _ => Err(FinderError::UnknownCommand(line.to_string())),
        }
    }
}

/// Parse commands from `reader`, one per line, and send them to `events`.
///
/// Blank lines are skipped and unknown commands are logged. Stops at end of
/// input, on a read error (logged) or once the receiver is gone.
pub async fn forward_commands<R: AsyncBufRead + Unpin>(
    reader: R,
    events: mpsc::Sender<InputEvent>,
) {
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Stopped reading input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<InputEvent>() {
            Ok(event) => {
                if events.send(event).await.is_err() {
                    break;
                }
            }
            Err(e) => warn!("{}", e),
        }
    }
}

/// Receives every recomputed view
pub trait RenderTarget {
    fn render(&mut self, view: &View);
}

impl<F: FnMut(&View)> RenderTarget for F {
    fn render(&mut self, view: &View) {
        self(view)
    }
}

/// The recipe browser: a store, the current query, favorites storage and
/// the search debouncer.
///
/// Every handler mutates the query and returns the recomputed [`View`],
/// except search input, which only lands once typing pauses.
pub struct RecipeApp {
    store: RecipeStore,
    state: QueryState,
    storage: Box<dyn KeyValueStore>,
    storage_key: String,
    search: Debouncer<String>,
}

impl RecipeApp {
    pub fn builder() -> RecipeAppBuilder {
        RecipeAppBuilder::default()
    }

    pub(crate) fn from_parts(
        store: RecipeStore,
        state: QueryState,
        storage: Box<dyn KeyValueStore>,
        storage_key: String,
        search: Debouncer<String>,
    ) -> Self {
        Self {
            store,
            state,
            storage,
            storage_key,
            search,
        }
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Recipes matching the current query, in display order
    pub fn visible(&self) -> Vec<&Recipe> {
        pipeline::view(&self.store, &self.state)
    }

    /// Recompute the displayed list
    pub fn view(&self) -> View {
        let recipes = self.visible();
        info!(
            "Displaying {} recipes (Filter: {}, Sort: {})",
            recipes.len(),
            self.state.filter,
            self.state.sort
        );
        View::new(&recipes, &self.state, self.store.len())
    }

    pub fn set_filter(&mut self, filter: Filter) -> View {
        self.state.filter = filter;
        self.view()
    }

    pub fn set_sort(&mut self, sort: SortOrder) -> View {
        self.state.sort = sort;
        self.view()
    }

    /// Record search input without applying it yet.
    ///
    /// Each call restarts the quiet period; [`RecipeApp::run`] applies the
    /// latest text once it elapses.
    pub fn input_search(&mut self, text: &str) {
        debug!("Search input {:?}, waiting {:?}", text, self.search.quiet_period());
        self.search.schedule(text.to_string());
    }

    /// Apply search text immediately, discarding any pending input
    pub fn apply_search(&mut self, text: &str) -> View {
        self.search.cancel();
        self.state.set_search_query(text);
        self.view()
    }

    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Flip `id` in the favorites and persist the whole set.
    ///
    /// A failed write is logged; the in-memory favorites still change.
    pub fn toggle_favorite(&mut self, id: u32) -> View {
        if !self.store.contains(id) {
            debug!("Toggling favorite for unknown recipe {}", id);
        }

        let now_favorite = self.state.toggle_favorite(id);
        debug!(
            "Recipe {} {} favorites",
            id,
            if now_favorite { "added to" } else { "removed from" }
        );

        if let Err(e) = save_favorites(
            self.storage.as_mut(),
            &self.storage_key,
            self.state.favorites(),
        ) {
            warn!("Failed to save favorites: {}", e);
        }

        self.view()
    }

    /// Handle one event; `None` when the display does not change yet
    pub fn handle(&mut self, event: InputEvent) -> Option<View> {
        match event {
            InputEvent::Filter(filter) => Some(self.set_filter(filter)),
            InputEvent::Sort(sort) => Some(self.set_sort(sort)),
            InputEvent::Search(text) => {
                self.input_search(&text);
                None
            }
            InputEvent::ToggleFavorite(id) => Some(self.toggle_favorite(id)),
        }
    }

    /// Drive the app from an event source until it closes.
    ///
    /// Renders the initial view, then every view produced by an event or
    /// by a settled search. Search text still pending when the source
    /// closes is applied before returning.
    pub async fn run<T: RenderTarget>(
        &mut self,
        mut events: mpsc::Receiver<InputEvent>,
        target: &mut T,
    ) {
        target.render(&self.view());

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        if let Some(view) = self.handle(event) {
                            target.render(&view);
                        }
                    }
                    None => break,
                },
                query = self.search.fired() => {
                    let view = self.apply_search(&query);
                    target.render(&view);
                }
            }
        }

        if let Some(query) = self.search.cancel() {
            let view = self.apply_search(&query);
            target.render(&view);
        }
    }
}
