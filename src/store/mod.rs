//! Key-value persistence for values that outlive a single game.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Get/set access to integer values by key.
///
/// The best score is the only value stored today; the trait is kept
/// narrow so tests can swap in [`MemoryStore`].
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError>;
}
