use super::KeyValueStore;
use crate::error::FinderError;
use std::collections::HashMap;

/// Volatile storage, lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FinderError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FinderError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
