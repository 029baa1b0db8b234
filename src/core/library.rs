use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum StoreError {
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
}

impl StoreError {
    pub fn not_found(message: &str) -> StoreError {
        StoreError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> StoreError {
        StoreError::Serialization { message: message.to_string() }
    }

    pub fn storage(message: &str, reason_code: Option<String>, retryable: bool) -> StoreError {
        StoreError::Storage { message: message.to_string(), reason_code, retryable }
    }

    pub fn retryable(&self) -> bool {
        match self {
            StoreError::NotFound { .. } => { false }
            StoreError::Serialization { .. } => { false }
            StoreError::Storage { retryable, .. } => { *retryable }
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::storage(
            format!("storage io {:?}", err).as_str(), None, false)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { message } => {
                write!(f, "{}", message)
            }
            StoreError::Serialization { message } => {
                write!(f, "{}", message)
            }
            StoreError::Storage { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
        }
    }
}

/// A specialized Result type for the book store.
pub type StoreResult<T> = Result<T, StoreError>;
