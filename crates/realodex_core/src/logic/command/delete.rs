//! Removes a person chosen by displayed index or by exact name.
//!
//! # Invariants
//! - Index targets resolve against the filtered list.
//! - Name targets search the whole book.

use crate::logic::command::{person_at, CommandError, CommandOutcome, CommandResult};
use crate::logic::index::Index;
use crate::logic::messages::format_person;
use crate::model::contact::Name;
use crate::model::manager::ModelManager;

/// How a delete command picks its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// Position in the displayed list.
    Index(Index),
    /// Exact name anywhere in the book.
    Name(Name),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    target: DeleteTarget,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person identified by the index \
number used in the displayed person list, or by their full name.\n\
Parameters: INDEX (must be a positive integer) or n/NAME\n\
Example: delete 1 or delete n/John Doe";

    pub fn by_index(index: Index) -> Self {
        Self {
            target: DeleteTarget::Index(index),
        }
    }

    pub fn by_name(name: Name) -> Self {
        Self {
            target: DeleteTarget::Name(name),
        }
    }

    pub fn target(&self) -> &DeleteTarget {
        &self.target
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        let target = match &self.target {
            DeleteTarget::Index(index) => person_at(model, *index)?,
            DeleteTarget::Name(name) => model
                .find_by_name(name)
                .cloned()
                .ok_or_else(|| CommandError::PersonNotFound(name.clone()))?,
        };
        let deleted = model.delete_person(&target)?;
        Ok(CommandResult::new(format!(
            "Deleted Person:\n{}",
            format_person(&deleted)
        )))
    }
}
