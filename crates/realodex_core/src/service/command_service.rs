//! Command use-case service.
//!
//! # Responsibility
//! - Own the model and its storage for one session.
//! - Turn raw command text into a `CommandResult` or a user-facing error.
//!
//! # Invariants
//! - The book is saved after every successful book-changing command.
//! - Commands that fail to parse or execute leave the model unchanged and
//!   skip saving.
//! - A failed save keeps the in-memory change and returns
//!   `ServiceError::SaveFailed` carrying the command's result.
//! - Log events carry the command word only, never argument text.

use crate::logic::command::{CommandError, CommandResult};
use crate::logic::parser::error::ParseError;
use crate::logic::parser::parse_command;
use crate::model::manager::{ModelError, ModelManager};
use crate::model::person::Person;
use crate::storage::{PersonStorage, StorageError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ServiceError {
    Parse(ParseError),
    Command(CommandError),
    Storage(StorageError),
    /// The command ran but its change could not be written.
    SaveFailed {
        result: CommandResult,
        source: StorageError,
    },
    /// Stored data could not form a valid book.
    Model(ModelError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::SaveFailed { source, .. } => write!(f, "Could not save data: {source}"),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::SaveFailed { source, .. } => Some(source),
            Self::Model(err) => Some(err),
        }
    }
}

impl From<ParseError> for ServiceError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for ServiceError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<ModelError> for ServiceError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

/// Session facade over model and storage.
pub struct CommandService<S: PersonStorage> {
    model: ModelManager,
    storage: S,
}

impl<S: PersonStorage> CommandService<S> {
    /// Loads the stored book and starts a session with it.
    pub fn open(storage: S) -> Result<Self, ServiceError> {
        let model = ModelManager::with_persons(storage.load()?)?;
        info!(
            "event=session_open module=service status=ok count={}",
            model.persons().len()
        );
        Ok(Self { model, storage })
    }

    /// Parses and runs one line of user input.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, ServiceError> {
        let command = parse_command(input).map_err(|err| {
            debug!("event=command_parse module=service status=error");
            err
        })?;
        let word = command.command_word();

        let result = command.execute(&mut self.model).map_err(|err| {
            warn!("event=command_execute module=service status=error command={word}");
            err
        })?;

        if command.mutates_book() {
            if let Err(source) = self.storage.save(self.model.persons()) {
                warn!("event=storage_save module=service status=error command={word}");
                return Err(ServiceError::SaveFailed { result, source });
            }
        }
        info!(
            "event=command_execute module=service status=ok command={word} visible={}",
            self.model.filtered_persons().len()
        );
        Ok(result)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    /// Persons the front end should currently display.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.model.filtered_persons()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
