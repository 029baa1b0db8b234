use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::domain::Identifiable;

// Book is the canonical record owned by the store. The id is assigned by
// the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub rating: f64,
    pub summary: String,
    // an absent note is distinct from an empty one, so it is omitted from
    // the encoded form entirely when not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Book {
    pub fn new(id: u64, dto: &BookDto) -> Self {
        Self {
            id,
            title: dto.title.to_string(),
            author: dto.author.to_string(),
            rating: dto.rating,
            summary: dto.summary.to_string(),
            note: dto.note.clone(),
        }
    }
}

impl Identifiable for Book {
    fn id(&self) -> u64 {
        self.id
    }
}
