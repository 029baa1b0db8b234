use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;

// BookDto carries the caller-supplied fields of a record, i.e. everything
// except the id, which only the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub rating: f64,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BookDto {
    pub fn new(title: &str, author: &str, rating: f64, summary: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            rating,
            summary: summary.to_string(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

impl From<&Book> for BookDto {
    fn from(other: &Book) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            rating: other.rating,
            summary: other.summary.to_string(),
            note: other.note.clone(),
        }
    }
}
