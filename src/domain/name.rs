//! Name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's name, stored verbatim.
///
/// Unlike [`Phone`](super::Phone) and [`Birthday`](super::Birthday), names
/// carry no validation contract: whatever string the user typed is the name,
/// and it doubles as the contact's lookup key in the address book
/// (exact-string, case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name. Never fails; the value is kept as-is.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
