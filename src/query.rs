use std::collections::BTreeSet;
use std::fmt;

/// Which subset of recipes to show.
///
/// Unrecognized names fall back to [`Filter::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
    /// Recipes that take less than 30 minutes
    Quick,
    Favorites,
}

impl Filter {
    pub const ALL: [Filter; 6] = [
        Filter::All,
        Filter::Easy,
        Filter::Medium,
        Filter::Hard,
        Filter::Quick,
        Filter::Favorites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Easy => "easy",
            Filter::Medium => "medium",
            Filter::Hard => "hard",
            Filter::Quick => "quick",
            Filter::Favorites => "favorites",
        }
    }
}

impl From<&str> for Filter {
    fn from(name: &str) -> Self {
        Filter::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display order of recipes.
///
/// Unrecognized names fall back to [`SortOrder::Original`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Catalogue order
    #[default]
    Original,
    Name,
    Time,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Original, SortOrder::Name, SortOrder::Time];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Original => "none",
            SortOrder::Name => "name",
            SortOrder::Time => "time",
        }
    }
}

impl From<&str> for SortOrder {
    fn from(name: &str) -> Self {
        SortOrder::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current filter, sort, search and favorites selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub filter: Filter,
    pub sort: SortOrder,
    search_query: String,
    favorites: BTreeSet<u32>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_favorites(favorites: BTreeSet<u32>) -> Self {
        Self {
            favorites,
            ..Self::default()
        }
    }

    /// Lowercased, trimmed search text; empty means no search
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = normalize_query(query);
    }

    pub fn favorites(&self) -> &BTreeSet<u32> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    /// Add `id` to the favorites if absent, remove it if present.
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parsing_falls_back_to_all() {
        assert_eq!(Filter::from("quick"), Filter::Quick);
        assert_eq!(Filter::from("Favorites"), Filter::Favorites);
        assert_eq!(Filter::from("spicy"), Filter::All);
        assert_eq!(Filter::from(""), Filter::All);
    }

    #[test]
    fn test_sort_parsing_falls_back_to_original() {
        assert_eq!(SortOrder::from("name"), SortOrder::Name);
        assert_eq!(SortOrder::from("time"), SortOrder::Time);
        assert_eq!(SortOrder::from("none"), SortOrder::Original);
        assert_eq!(SortOrder::from("calories"), SortOrder::Original);
    }

    #[test]
    fn test_wire_names_round_trip() {
        for filter in Filter::ALL {
            assert_eq!(Filter::from(filter.as_str()), filter);
        }
        for sort in SortOrder::ALL {
            assert_eq!(SortOrder::from(sort.to_string().as_str()), sort);
        }
    }

    #[test]
    fn test_defaults() {
        let state = QueryState::new();
        assert_eq!(state.filter, Filter::All);
        assert_eq!(state.sort, SortOrder::Original);
        assert_eq!(state.search_query(), "");
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn test_search_query_is_normalized() {
        let mut state = QueryState::new();
        state.set_search_query("  Rice NOODLES ");
        assert_eq!(state.search_query(), "rice noodles");

        state.set_search_query("   ");
        assert_eq!(state.search_query(), "");
    }

    #[test]
    fn test_toggle_favorite_twice_restores_membership() {
        let mut state = QueryState::with_favorites(BTreeSet::from([2, 5]));
        let before = state.favorites().clone();

        assert!(state.toggle_favorite(7));
        assert!(state.is_favorite(7));
        assert!(!state.toggle_favorite(7));
        assert_eq!(state.favorites(), &before);

        assert!(!state.toggle_favorite(2));
        assert!(state.toggle_favorite(2));
        assert_eq!(state.favorites(), &before);
    }
}
