//! expense-tracker Library
//!
//! Personal expense tracking API: user registration and login, transaction
//! CRUD and an income/expense summary. Re-exports modules for the server
//! binary and integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
mod error;
pub mod services;
pub mod store;

pub use api::{build_router, AppState};
pub use config::{Config, ConfigError};
pub use domain::{DomainError, Summary, Transaction, TransactionFields};
pub use error::{AppError, AppResult, ErrorResponse};
