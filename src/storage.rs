pub mod file_storage;
pub mod memory_storage;

use crate::core::library::StoreResult;

// KeyValueStorage abstracts the string key-value facility supplied by the
// host environment that backs the store's snapshots.
pub trait KeyValueStorage: Send {
    // read the value stored under key, or None if absent
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    // write value under key, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;
}
