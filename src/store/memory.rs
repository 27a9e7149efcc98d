//! In-memory store.

use std::collections::HashMap;

use tracing::{debug, instrument};

use super::{KeyValueStore, StoreError};

/// Store backed by a `HashMap`, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    #[instrument(skip(self))]
    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        debug!(key, value, "Storing value in memory");
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
