//! Store module
//!
//! Persistence interfaces for users and transactions, with a SQLite
//! implementation for the server and an in-memory one for tests.

mod error;
mod memory;
mod sqlite;

use async_trait::async_trait;

use crate::domain::{Transaction, TransactionKind, User};

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

/// Persistence for user identity records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by exact (case-sensitive) username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user. Fails with [`StoreError::Duplicate`] if the
    /// username is taken.
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;
}

/// Persistence for transaction records.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert_transaction(&self, transaction: &Transaction) -> Result<(), StoreError>;

    /// All rows, in no guaranteed order
    async fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError>;

    async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>, StoreError>;

    /// Overwrite every column of the row with `transaction.id`.
    /// Returns the number of rows affected.
    async fn update_transaction(&self, transaction: &Transaction) -> Result<u64, StoreError>;

    /// Returns the number of rows affected.
    async fn delete_transaction(&self, id: &str) -> Result<u64, StoreError>;

    /// Sum of `amount` over rows of the given kind, 0 when there are none
    async fn total_amount_by_type(&self, kind: TransactionKind) -> Result<f64, StoreError>;
}
