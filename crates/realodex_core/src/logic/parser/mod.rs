//! Command text parsing.
//!
//! # Responsibility
//! - Split the leading command word from its arguments.
//! - Dispatch to the matching per-command parser.
//!
//! # Invariants
//! - Parsing never touches the model.
//! - Every failure is a `ParseError` whose display text is user-facing.

pub mod add;
pub mod delete;
pub mod edit;
pub mod error;
pub mod filter;
pub mod syntax;
pub mod tokenizer;
pub mod util;

use crate::logic::command::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, ExitCommand, FilterCommand,
    HelpCommand, ListCommand,
};
use error::{ParseError, ParseResult};

/// Parses one line of user input into a command.
///
/// Trailing text after argument-less command words is ignored.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat(HelpCommand::MESSAGE_USAGE));
    }
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    match word {
        AddCommand::COMMAND_WORD => add::parse_add(args).map(Command::Add),
        DeleteCommand::COMMAND_WORD => delete::parse_delete(args).map(Command::Delete),
        EditCommand::COMMAND_WORD => edit::parse_edit(args).map(Command::Edit),
        FilterCommand::COMMAND_WORD => filter::parse_filter(args).map(Command::Filter),
        ListCommand::COMMAND_WORD => Ok(Command::List(ListCommand)),
        ClearCommand::COMMAND_WORD => Ok(Command::Clear(ClearCommand)),
        HelpCommand::COMMAND_WORD => Ok(Command::Help(HelpCommand)),
        ExitCommand::COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
        _ => Err(ParseError::UnknownCommand),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_command;
    use crate::logic::command::{Command, HelpCommand, ListCommand};
    use crate::logic::parser::error::ParseError;

    #[test]
    fn dispatches_on_command_word() {
        assert_eq!(parse_command("list").unwrap(), Command::List(ListCommand));
        assert_eq!(parse_command("  list extra ").unwrap().command_word(), "list");
        assert!(matches!(parse_command("delete 1").unwrap(), Command::Delete(_)));
        assert!(matches!(
            parse_command("filter n/Alice").unwrap(),
            Command::Filter(_)
        ));
    }

    #[test]
    fn unknown_word_and_blank_input_fail() {
        assert_eq!(
            parse_command("launch rockets").unwrap_err(),
            ParseError::UnknownCommand
        );
        assert_eq!(
            parse_command("   ").unwrap_err(),
            ParseError::InvalidFormat(HelpCommand::MESSAGE_USAGE)
        );
    }

    #[test]
    fn command_words_are_case_sensitive() {
        assert_eq!(parse_command("LIST").unwrap_err(), ParseError::UnknownCommand);
    }
}
