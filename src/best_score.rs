//! Best score tracking across games.

use tracing::{debug, info, instrument};

use crate::store::{KeyValueStore, StoreError};

/// Key under which the best score is stored.
pub const BEST_SCORE_KEY: &str = "bestScore";

/// Highest score seen, persisted through a [`KeyValueStore`].
///
/// The value belongs to the store, not to any one game, so it survives
/// engine resets and restarts of the program.
#[derive(Debug, Clone)]
pub struct BestScore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BestScore<S> {
    /// Tracks the best score under [`BEST_SCORE_KEY`].
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        Self::with_key(store, BEST_SCORE_KEY)
    }

    /// Tracks the best score under a custom key.
    #[instrument(skip(store, key), fields(key = %key.as_ref()))]
    pub fn with_key(store: S, key: impl AsRef<str>) -> Self {
        Self {
            store,
            key: key.as_ref().to_string(),
        }
    }

    /// Stored best score, or 0 if nothing has been stored yet.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn best(&self) -> Result<u64, StoreError> {
        Ok(self.store.get(&self.key)?.unwrap_or(0))
    }

    /// Compares `current` with the stored best and returns the value to show.
    ///
    /// The store is only written when `current` is strictly higher.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn record(&mut self, current: u64) -> Result<u64, StoreError> {
        let best = self.best()?;
        if current > best {
            self.store.set(&self.key, current)?;
            info!(previous = best, best = current, "New best score");
            Ok(current)
        } else {
            debug!(best, current, "Best score unchanged");
            Ok(best)
        }
    }

    /// Resets the stored best score to 0.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn clear(&mut self) -> Result<(), StoreError> {
        info!("Clearing best score");
        self.store.set(&self.key, 0)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
