//! Services module
//!
//! Auth and transaction operations. Each service is built once at startup
//! around an injected store handle.

mod auth_service;
mod commands;
mod transaction_service;

pub use auth_service::AuthService;
pub use commands::*;
pub use transaction_service::TransactionService;
