//! User identity records

use uuid::Uuid;

use super::password::PasswordHash;

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: PasswordHash,
}

impl User {
    /// Create a new user with a freshly generated id
    pub fn create(username: impl Into<String>, password: PasswordHash) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            password,
        }
    }
}
