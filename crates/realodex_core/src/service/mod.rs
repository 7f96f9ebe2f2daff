//! Use-case services.
//!
//! # Responsibility
//! - Run one command per call: parse, execute, persist.
//! - Keep front ends decoupled from parser, model and storage details.

pub mod command_service;
