use std::path::PathBuf;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent records
pub trait Identifiable {
    fn id(&self) -> u64;
}

// Configuration abstracts config options for the book store
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    // fixed key the collection snapshot is stored under
    pub storage_key: String,
    // root directory used by the file-backed storage
    pub data_dir: PathBuf,
}

impl Configuration {
    pub fn new(data_dir: &str) -> Self {
        Configuration {
            storage_key: "books".to_string(),
            data_dir: PathBuf::from(data_dir),
        }
    }
}
