use crate::books::store::BookStore;
use crate::core::domain::Configuration;
use crate::core::library::StoreResult;
use crate::storage::file_storage::FileStorage;
use crate::storage::memory_storage::MemoryStorage;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StorageBackend {
    Memory,
    File,
}

pub fn create_book_store(config: &Configuration, backend: StorageBackend) -> StoreResult<BookStore> {
    match backend {
        StorageBackend::Memory => {
            BookStore::open(Box::new(MemoryStorage::new()), config)
        }
        StorageBackend::File => {
            BookStore::open(Box::new(FileStorage::new(config.data_dir.as_path())), config)
        }
    }
}
