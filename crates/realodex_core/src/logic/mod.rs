//! Command language: parsing input text and executing commands.
//!
//! # See also
//! - `model` for the state commands operate on.

pub mod command;
pub mod index;
pub mod messages;
pub mod parser;

pub use command::{Command, CommandError, CommandResult};
pub use parser::error::ParseError;
pub use parser::parse_command;
