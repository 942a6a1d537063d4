//! Contact Assistant - an interactive command-line contact book.
//!
//! This library implements an assistant bot that keeps contacts (names,
//! phone numbers, birthdays) in memory, validates every field at the edge,
//! and answers which birthdays fall within the next seven days. All state
//! lives in one in-process address book; nothing is persisted.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the `Record` contact model
//! - **book**: the in-memory `AddressBook` keyed by name
//! - **commands**: command grammar, handlers, and the error-to-reply boundary
//! - **repl**: the interactive prompt loop over stdin/stdout
//! - **error**: typed error taxonomy for handlers and configuration
//! - **config**: environment-based diagnostic settings

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{dispatch, parse_input, CommandKind, ParsedInput};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, ConfigResult};
pub use models::Record;
pub use repl::Repl;
