use tracing::{debug, info};
use crate::books::domain::model::Book;
use crate::books::dto::BookDto;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{StoreError, StoreResult};
use crate::storage::KeyValueStorage;

// BookStore owns the canonical in-memory collection of records and mirrors
// every mutation to the persistence backend as a full snapshot under a
// fixed key. It is the only component allowed to mutate the collection.
pub struct BookStore {
    storage: Box<dyn KeyValueStorage>,
    storage_key: String,
    books: Vec<Book>,
}

impl BookStore {
    // Recovers previously persisted state, or starts empty when the backend
    // holds nothing under the key. Malformed persisted data is fatal.
    pub fn open(storage: Box<dyn KeyValueStorage>, config: &Configuration) -> StoreResult<Self> {
        let books: Vec<Book> = match storage.read(config.storage_key.as_str())? {
            Some(raw) => serde_json::from_str(raw.as_str())?,
            None => vec![],
        };
        info!("opened book store with {} records", books.len());
        Ok(Self {
            storage,
            storage_key: config.storage_key.to_string(),
            books,
        })
    }

    // Appends a new record with the next free id and returns it.
    pub fn add_book(&mut self, dto: &BookDto) -> StoreResult<Book> {
        let book = Book::new(self.next_id(), dto);
        self.books.push(book.clone());
        self.persist()?;
        Ok(book)
    }

    // Replaces all non-id fields of the matching record with the supplied
    // ones. The id is never altered.
    pub fn update_book(&mut self, id: u64, dto: &BookDto) -> StoreResult<Book> {
        let index = self.books.iter().position(|book| book.id() == id)
            .ok_or_else(|| StoreError::not_found(
                format!("book not found for {}", id).as_str()))?;
        self.books[index] = Book::new(id, dto);
        self.persist()?;
        Ok(self.books[index].clone())
    }

    // Removes the matching record, preserving the relative order of the
    // remaining ones. Returns whether a record was removed; deleting an
    // absent id is a no-op with no persistence write.
    pub fn delete_book(&mut self, id: u64) -> StoreResult<bool> {
        match self.books.iter().position(|book| book.id() == id) {
            Some(index) => {
                self.books.remove(index);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // pure lookup, no persistence interaction
    pub fn get_book(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    pub fn books(&self) -> &[Book] {
        self.books.as_slice()
    }

    // 1 for an empty collection, else highest assigned id plus one, so ids
    // freed by deletion are never reused
    fn next_id(&self) -> u64 {
        self.books.iter().map(|book| book.id()).max().map_or(1, |max| max + 1)
    }

    // full-snapshot write-through: the backend reflects the in-memory state
    // before any mutating call returns
    fn persist(&mut self) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.books)?;
        self.storage.write(self.storage_key.as_str(), encoded.as_str())?;
        debug!("persisted {} records under {}", self.books.len(), self.storage_key);
        Ok(())
    }
}
