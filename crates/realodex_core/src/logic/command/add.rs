//! Adds a new person to the book.

use crate::logic::command::{CommandOutcome, CommandResult};
use crate::logic::messages::format_person;
use crate::model::manager::ModelManager;
use crate::model::person::Person;

/// Adds one person to the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to Realodex.\n\
Parameters: n/NAME p/PHONE i/INCOME e/EMAIL a/ADDRESS f/FAMILY h/HOUSING_TYPE t/TAG... [r/REMARK] [b/BIRTHDAY]\n\
Example: add n/John Doe p/98765432 i/20000 e/johnd@example.com a/311, Clementi Ave 2, #02-25 f/4 h/HDB t/buyer r/Likes cats b/01May2009";

    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.add_person(self.person.clone())?;
        Ok(CommandResult::new(format!(
            "New person added:\n{}",
            format_person(&self.person)
        )))
    }
}
