//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. The `Display` output of every variant is the exact user-facing
//! message; command handlers are the boundary where these are converted to
//! reply text.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised inside a command handler.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field value failed validation; the message comes from the domain.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The requested name is absent from the address book.
    #[error("Contact not found.")]
    ContactNotFound,

    /// Too few positional arguments for the command.
    #[error("Invalid input, please provide enough arguments.")]
    MissingArguments,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
