//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The `Display` output of each variant is the exact message shown to the
/// user, so handlers can surface these verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a valid DD.MM.YYYY calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => {
                write!(f, "Phone number must contain exactly 10 digits.")
            }
            Self::InvalidBirthday(_) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
