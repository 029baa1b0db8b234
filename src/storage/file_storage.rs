use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::core::library::{StoreError, StoreResult};
use crate::storage::KeyValueStorage;

// FileStorage maps each key to a file under a root directory so that
// snapshots survive process restarts.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            // a missing file means the key was never written
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::storage(
                format!("failed to read {} due to {}", key, err).as_str(), None, false)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(self.root.as_path())?;
        fs::write(self.key_path(key), value)?;
        debug!("wrote {} bytes under {}", value.len(), key);
        Ok(())
    }
}
