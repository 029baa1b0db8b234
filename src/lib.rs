pub mod books;
pub mod core;
pub mod storage;
pub mod utils;

pub use crate::books::domain::model::Book;
pub use crate::books::dto::BookDto;
pub use crate::books::store::BookStore;
pub use crate::core::library::{StoreError, StoreResult};
