//! Domain model for Realodex client records.
//!
//! # Responsibility
//! - Define validated value objects and the `Person` aggregate.
//! - Hold the in-memory person book and its filtered view.
//!
//! # Invariants
//! - Invalid field values are rejected at construction, never stored.
//! - Persons are identified by name for "same person" checks.

pub mod constraint;
pub mod contact;
pub mod household;
pub mod manager;
pub mod person;
pub mod predicate;
pub mod profile;
pub mod tag;
