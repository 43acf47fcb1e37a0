//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Input and credential errors raised before anything touches the store.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// One or more required fields were absent, null or empty
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The password could not be hashed or a stored hash could not be read
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl DomainError {
    /// Build a missing-fields error, or `None` when nothing is missing
    pub fn missing(fields: Vec<&'static str>) -> Option<Self> {
        if fields.is_empty() {
            None
        } else {
            Some(Self::MissingFields(fields))
        }
    }

    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingFields(_))
    }

    /// Machine-readable code reported alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "missing_fields",
            Self::PasswordHash(_) => "password_hash",
        }
    }
}

/// Treat absent and empty strings alike.
pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
