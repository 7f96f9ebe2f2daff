//! Argument-less commands.

use crate::logic::command::{
    AddCommand, CommandOutcome, CommandResult, DeleteCommand, EditCommand, FilterCommand,
};
use crate::model::manager::ModelManager;

/// Clears the filter and shows every person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all persons";

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.update_filter(None);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

/// Removes every person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_SUCCESS: &'static str = "Realodex has been cleared!";

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.clear();
        model.update_filter(None);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str =
        "help: Shows program usage instructions.\nExample: help";

    pub fn execute(&self, _model: &mut ModelManager) -> CommandOutcome {
        let sections = [
            AddCommand::MESSAGE_USAGE,
            EditCommand::MESSAGE_USAGE,
            DeleteCommand::MESSAGE_USAGE,
            FilterCommand::MESSAGE_USAGE,
            "list: Shows all persons.",
            "clear: Deletes all persons.",
            "exit: Exits the program.",
        ];
        Ok(CommandResult::help(sections.join("\n\n")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting Realodex as requested ...";

    pub fn execute(&self, _model: &mut ModelManager) -> CommandOutcome {
        Ok(CommandResult::exit(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT))
    }
}
