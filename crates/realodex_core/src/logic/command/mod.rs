//! Executable commands.
//!
//! # Responsibility
//! - Define one command type per command word and a `Command` union over them.
//! - Apply a command to the model and report a `CommandResult`.
//!
//! # Invariants
//! - Execution only touches the in-memory model.
//! - Indexes refer to the currently filtered list, not the full book.

pub mod add;
pub mod basic;
pub mod delete;
pub mod edit;
pub mod filter;

use crate::logic::index::Index;
use crate::logic::messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX;
use crate::model::constraint::ConstraintViolation;
use crate::model::contact::Name;
use crate::model::manager::{ModelError, ModelManager};
use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use add::AddCommand;
pub use basic::{ClearCommand, ExitCommand, HelpCommand, ListCommand};
pub use delete::{DeleteCommand, DeleteTarget};
pub use edit::{EditCommand, EditPersonDescriptor};
pub use filter::FilterCommand;

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// Feedback for one executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// The front end should show help.
    pub show_help: bool,
    /// The front end should shut down.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// Execution-stage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Index beyond the displayed list.
    IndexOutOfRange { index: Index, len: usize },
    DuplicatePerson(Name),
    PersonNotFound(Name),
    /// The resulting person would break a record-level rule.
    Constraint(ConstraintViolation),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "{MESSAGE_INVALID_PERSON_DISPLAYED_INDEX}: {index} (displayed list has {len} persons)"
            ),
            Self::DuplicatePerson(name) => {
                write!(f, "This person already exists in Realodex: {name}")
            }
            Self::PersonNotFound(name) => write!(f, "No person named {name} found in Realodex"),
            Self::Constraint(violation) => write!(f, "{violation}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Constraint(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<ConstraintViolation> for CommandError {
    fn from(value: ConstraintViolation) -> Self {
        Self::Constraint(value)
    }
}

impl From<ModelError> for CommandError {
    fn from(value: ModelError) -> Self {
        match value {
            ModelError::DuplicatePerson(name) => Self::DuplicatePerson(name),
            ModelError::PersonNotFound(name) => Self::PersonNotFound(name),
        }
    }
}

/// Any parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    Filter(FilterCommand),
    List(ListCommand),
    Clear(ClearCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        match self {
            Self::Add(command) => command.execute(model),
            Self::Delete(command) => command.execute(model),
            Self::Edit(command) => command.execute(model),
            Self::Filter(command) => command.execute(model),
            Self::List(command) => command.execute(model),
            Self::Clear(command) => command.execute(model),
            Self::Help(command) => command.execute(model),
            Self::Exit(command) => command.execute(model),
        }
    }

    pub fn command_word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::COMMAND_WORD,
            Self::Delete(_) => DeleteCommand::COMMAND_WORD,
            Self::Edit(_) => EditCommand::COMMAND_WORD,
            Self::Filter(_) => FilterCommand::COMMAND_WORD,
            Self::List(_) => ListCommand::COMMAND_WORD,
            Self::Clear(_) => ClearCommand::COMMAND_WORD,
            Self::Help(_) => HelpCommand::COMMAND_WORD,
            Self::Exit(_) => ExitCommand::COMMAND_WORD,
        }
    }

    /// Whether a successful run changes stored persons.
    pub fn mutates_book(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Delete(_) | Self::Edit(_) | Self::Clear(_)
        )
    }
}

/// Looks up a displayed person by index.
fn person_at(model: &ModelManager, index: Index) -> Result<Person, CommandError> {
    let displayed = model.filtered_persons();
    displayed
        .get(index.zero_based())
        .map(|person| (*person).clone())
        .ok_or(CommandError::IndexOutOfRange {
            index,
            len: displayed.len(),
        })
}
