//! Shared domain types for the studio booking workspace.
//!
//! Everything here is free of I/O: the HTTP client (`studio-client`) and the
//! reference service (`studio-api`) both build on these models, validators and
//! the [`capability::Capability`] check.

pub mod capability;
pub mod error;
pub mod forms;
pub mod models;
pub mod types;
