//! Core domain logic for Realodex.
//! This crate is the single source of truth for client-record invariants.

pub mod config;
pub mod logging;
pub mod logic;
pub mod model;
pub mod service;
pub mod storage;

pub use config::{load_config, AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use logic::command::{
    AddCommand, ClearCommand, Command, CommandError, CommandResult, DeleteCommand, DeleteTarget,
    EditCommand, EditPersonDescriptor, ExitCommand, FilterCommand, HelpCommand, ListCommand,
};
pub use logic::index::Index;
pub use logic::parser::error::ParseError;
pub use logic::parser::parse_command;
pub use model::constraint::ConstraintViolation;
pub use model::contact::{Address, Email, Name, Phone};
pub use model::household::{Family, HousingType, Income};
pub use model::manager::{ModelError, ModelManager};
pub use model::person::Person;
pub use model::predicate::{
    BirthdayInMonth, HousingTypeMatch, NameContainsKeyphrase, PersonFilter, PersonPredicate,
    RemarkContainsKeyphrase, TagsMatch,
};
pub use model::profile::{Birthday, Month, Remark};
pub use model::tag::Tag;
pub use service::command_service::{CommandService, ServiceError};
pub use storage::{JsonPersonStorage, PersonStorage, StorageError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
