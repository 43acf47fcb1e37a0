//! Salted password hashes.
//!
//! Hashing is deliberately slow, so callers on the async runtime should go
//! through [`PasswordHash::hash_blocking`] and [`PasswordHash::verify_blocking`].

use std::fmt::Display;

use super::error::DomainError;

/// A bcrypt password hash. Never holds a plaintext password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash `raw_password` with the given bcrypt `cost`.
    pub fn new(raw_password: &str, cost: u32) -> Result<Self, DomainError> {
        bcrypt::hash(raw_password, cost)
            .map(Self)
            .map_err(|e| DomainError::PasswordHash(e.to_string()))
    }

    /// Wrap a hash read from the store without checking it.
    pub fn new_unchecked(raw_password_hash: impl Into<String>) -> Self {
        Self(raw_password_hash.into())
    }

    /// Check that `raw_password` matches this hash.
    pub fn verify(&self, raw_password: &str) -> Result<bool, DomainError> {
        bcrypt::verify(raw_password, &self.0).map_err(|e| DomainError::PasswordHash(e.to_string()))
    }

    /// [`PasswordHash::new`] on the blocking thread pool.
    pub async fn hash_blocking(raw_password: String, cost: u32) -> Result<Self, DomainError> {
        tokio::task::spawn_blocking(move || Self::new(&raw_password, cost))
            .await
            .map_err(|e| DomainError::PasswordHash(e.to_string()))?
    }

    /// [`PasswordHash::verify`] on the blocking thread pool.
    pub async fn verify_blocking(&self, raw_password: String) -> Result<bool, DomainError> {
        let hash = self.clone();
        tokio::task::spawn_blocking(move || hash.verify(&raw_password))
            .await
            .map_err(|e| DomainError::PasswordHash(e.to_string()))?
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
