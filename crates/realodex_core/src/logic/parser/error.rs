//! Parse-stage errors.

use crate::logic::command::filter::FilterCommand;
use crate::logic::messages::{
    duplicate_prefixes, MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_INVALID_INDEX,
    MESSAGE_UNKNOWN_COMMAND,
};
use crate::logic::parser::syntax::Prefix;
use crate::model::constraint::ConstraintViolation;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ParseResult<T> = Result<T, ParseError>;

/// Malformed command text. Display output is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Generic format error carrying the command's usage text.
    InvalidFormat(&'static str),
    /// More than one filter category in a single filter command.
    FilterConflict,
    /// Single-valued prefixes given more than once.
    DuplicatePrefixes(Vec<Prefix>),
    /// Index is not a non-zero unsigned integer.
    InvalidIndex,
    UnknownCommand,
    /// `r/` given to filter without a keyphrase.
    EmptyRemarkFilter,
    /// Edit command without any field prefix.
    NoFieldsEdited,
    /// A field value failed its constraint.
    Constraint(ConstraintViolation),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(usage) => write!(f, "{MESSAGE_INVALID_COMMAND_FORMAT}{usage}"),
            Self::FilterConflict => write!(
                f,
                "{MESSAGE_INVALID_COMMAND_FORMAT}{}",
                FilterCommand::MESSAGE_FILTER_CONFLICT
            ),
            Self::DuplicatePrefixes(prefixes) => write!(f, "{}", duplicate_prefixes(prefixes)),
            Self::InvalidIndex => write!(f, "{MESSAGE_INVALID_INDEX}"),
            Self::UnknownCommand => write!(f, "{MESSAGE_UNKNOWN_COMMAND}"),
            Self::EmptyRemarkFilter => write!(f, "{}", FilterCommand::MESSAGE_FILTER_EMPTY_REMARK),
            Self::NoFieldsEdited => write!(f, "At least one field to edit must be provided."),
            Self::Constraint(violation) => write!(f, "{violation}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Constraint(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<ConstraintViolation> for ParseError {
    fn from(value: ConstraintViolation) -> Self {
        Self::Constraint(value)
    }
}
