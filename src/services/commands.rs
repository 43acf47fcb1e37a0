//! Command definitions
//!
//! Commands carry unvalidated client input into the services.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Username/password pair submitted to register or log in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsCommand {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsCommand {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Split into `(username, password)`, failing if either is absent or empty.
    pub fn into_parts(self) -> Result<(String, String), DomainError> {
        let username = self.username.filter(|s| !s.is_empty());
        let password = self.password.filter(|s| !s.is_empty());

        match (username, password) {
            (Some(username), Some(password)) => Ok((username, password)),
            (username, password) => {
                let mut missing = Vec::new();
                if username.is_none() {
                    missing.push("username");
                }
                if password.is_none() {
                    missing.push("password");
                }
                Err(DomainError::MissingFields(missing))
            }
        }
    }
}

/// Result of a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResult {
    pub user_id: String,
    pub username: String,
}

/// Result of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub token: String,
}

/// Result of a successful transaction creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionResult {
    pub id: String,
}
