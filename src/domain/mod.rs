//! Domain module
//!
//! Core domain types and business logic.

pub mod error;
pub mod password;
pub mod summary;
pub mod transaction;
pub mod user;

pub use error::DomainError;
pub use password::PasswordHash;
pub use summary::Summary;
pub use transaction::{Transaction, TransactionFields, TransactionKind};
pub use user::User;
