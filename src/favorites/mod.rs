//! Persistence of the favorite recipe ids.
//!
//! Favorites live in a key-value store under a single key, serialized as a
//! JSON array of ids. Reading never fails: anything unreadable counts as
//! "no favorites yet".

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::FinderError;
use log::{debug, warn};
use std::collections::BTreeSet;

/// Default storage key for the favorites list
pub const FAVORITES_KEY: &str = "recipe-finder.favorites";

/// String key-value storage, in the manner of a browser's local storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, FinderError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), FinderError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, FinderError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FinderError> {
        (**self).set(key, value)
    }
}

/// Read the favorite ids stored under `key`.
///
/// Absent, unreadable or malformed data yields an empty set.
pub fn load_favorites(store: &dyn KeyValueStore, key: &str) -> BTreeSet<u32> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No favorites stored under '{}'", key);
            return BTreeSet::new();
        }
        Err(e) => {
            warn!("Failed to read favorites: {}", e);
            return BTreeSet::new();
        }
    };

    match serde_json::from_str::<Vec<u32>>(&raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            warn!("Ignoring malformed favorites {:?}: {}", raw, e);
            BTreeSet::new()
        }
    }
}

/// Write the full favorite set under `key`
pub fn save_favorites(
    store: &mut dyn KeyValueStore,
    key: &str,
    favorites: &BTreeSet<u32>,
) -> Result<(), FinderError> {
    let ids: Vec<u32> = favorites.iter().copied().collect();
    store.set(key, &serde_json::to_string(&ids)?)
}
