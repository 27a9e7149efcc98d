//! JSON file store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use super::{KeyValueStore, StoreError};

/// Store kept as a flat JSON object on disk.
///
/// Every call reads the file, so several processes sharing one path see
/// each other's writes. Writes go to a sibling temp file that is then
/// renamed over the original.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store at `path`. The file is created on first write.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("JSON file store created");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<BTreeMap<String, u64>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                StoreError::new(format!(
                    "Failed to parse '{}': {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store file missing, treating as empty");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(StoreError::new(format!(
                "Failed to read '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }

    #[instrument(skip(self, values), fields(path = %self.path.display()))]
    fn save(&self, values: &BTreeMap<String, u64>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(values)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(entries = values.len(), "Store file written");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.load()?.get(key).copied())
    }

    #[instrument(skip(self))]
    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value);
        self.save(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_new_is_quiet_at_info() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let store = tracing::subscriber::with_default(subscriber, || {
            JsonFileStore::new("never_written.json")
        });

        assert_eq!(store.path(), Path::new("never_written.json"));
        assert!(!store.path().exists());
        assert!(captured.0.lock().unwrap().is_empty());
    }
}
