//! Constraint violation raised by value-object constructors.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A field value failed its validity check.
///
/// `message` is the field's constant constraint text and is surfaced to the
/// user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// Stable field identifier, e.g. `family`.
    pub field: &'static str,
    /// Human-readable constraint message.
    pub message: &'static str,
}

impl ConstraintViolation {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ConstraintViolation {}
