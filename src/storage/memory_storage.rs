use std::collections::HashMap;
use crate::core::library::StoreResult;
use crate::storage::KeyValueStorage;

// MemoryStorage keeps key-value pairs in process memory, for ephemeral
// stores and tests. Reads and writes never fail.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
