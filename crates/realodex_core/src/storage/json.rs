//! JSON file storage.
//!
//! File shape: `{"persons": [ {...}, ... ]}`.

use crate::model::person::Person;
use crate::storage::{PersonStorage, StorageError, StorageResult};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct StoredBook {
    persons: Vec<Person>,
}

#[derive(Debug, Serialize)]
struct StoredBookRef<'a> {
    persons: &'a [Person],
}

/// Person storage backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonPersonStorage {
    path: PathBuf,
}

impl JsonPersonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> StorageError {
        StorageError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

impl PersonStorage for JsonPersonStorage {
    fn load(&self) -> StorageResult<Vec<Person>> {
        if !self.path.exists() {
            info!(
                "event=storage_load module=storage status=missing path={}",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|err| self.io_error(err))?;
        let book: StoredBook = serde_json::from_str(&raw).map_err(|err| {
            warn!(
                "event=storage_load module=storage status=error path={}",
                self.path.display()
            );
            self.json_error(err)
        })?;

        for (idx, person) in book.persons.iter().enumerate() {
            if book.persons[..idx]
                .iter()
                .any(|earlier| earlier.is_same_person(person))
            {
                return Err(StorageError::InvalidData(format!(
                    "duplicate person `{}`",
                    person.name()
                )));
            }
        }

        info!(
            "event=storage_load module=storage status=ok count={}",
            book.persons.len()
        );
        Ok(book.persons)
    }

    fn save(&self, persons: &[Person]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        let encoded = serde_json::to_string_pretty(&StoredBookRef { persons })
            .map_err(|err| self.json_error(err))?;
        std::fs::write(&self.path, encoded).map_err(|err| self.io_error(err))?;
        info!(
            "event=storage_save module=storage status=ok count={}",
            persons.len()
        );
        Ok(())
    }
}
