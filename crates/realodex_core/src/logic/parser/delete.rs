//! `delete` argument parsing, by displayed index or by name.

use crate::logic::command::DeleteCommand;
use crate::logic::parser::error::{ParseError, ParseResult};
use crate::logic::parser::syntax::PREFIX_NAME;
use crate::logic::parser::tokenizer::tokenize;
use crate::logic::parser::util::{parse_index, parse_name};

/// Parses `delete INDEX` or `delete n/NAME`.
///
/// A present `n/` selects name mode; otherwise the whole argument string must
/// be an index.
pub fn parse_delete(args: &str) -> ParseResult<DeleteCommand> {
    let map = tokenize(args, &[PREFIX_NAME]);
    if let Some(raw) = map.value(PREFIX_NAME) {
        if !map.preamble().is_empty() {
            return Err(ParseError::InvalidFormat(DeleteCommand::MESSAGE_USAGE));
        }
        map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME])?;
        return Ok(DeleteCommand::by_name(parse_name(raw)?));
    }

    let index =
        parse_index(args).map_err(|_| ParseError::InvalidFormat(DeleteCommand::MESSAGE_USAGE))?;
    Ok(DeleteCommand::by_index(index))
}
