//! Person book persistence.
//!
//! # Responsibility
//! - Define the storage contract used by the command service.
//! - Keep file format details out of the model and command layers.
//!
//! # Invariants
//! - Loaded persons pass the same validation as user input.
//! - A loaded book never contains two same-persons.

pub mod json;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub use json::JsonPersonStorage;

use crate::model::person::Person;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Decoded data violates a book invariant.
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access data file `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "data file `{}` is malformed: {source}", path.display())
            }
            Self::InvalidData(message) => write!(f, "invalid stored data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidData(_) => None,
        }
    }
}

/// Load/save contract for the person book.
pub trait PersonStorage {
    /// Returns stored persons in stored order; an absent store is empty.
    fn load(&self) -> StorageResult<Vec<Person>>;
    /// Replaces stored persons with `persons`.
    fn save(&self, persons: &[Person]) -> StorageResult<()>;
}
