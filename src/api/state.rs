//! Shared handler state.

use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::config::Config;
use crate::services::{AuthService, TransactionService};
use crate::store::{TransactionStore, UserStore};

/// Everything a request handler needs, cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub transactions: TransactionService,
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        transactions: Arc<dyn TransactionStore>,
        config: &Config,
    ) -> Self {
        let tokens = TokenIssuer::new(config.jwt_secret.as_bytes());

        Self {
            auth: AuthService::new(users, tokens.clone(), config.bcrypt_cost),
            transactions: TransactionService::new(transactions),
            tokens,
        }
    }
}
