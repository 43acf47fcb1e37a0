//! Registration and login.

use std::sync::Arc;

use crate::auth::{Claims, TokenIssuer};
use crate::domain::{PasswordHash, User};
use crate::error::AppError;
use crate::store::UserStore;

use super::{CredentialsCommand, LoginResult, RegisterResult};

/// Registers users and exchanges valid credentials for bearer tokens.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenIssuer,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenIssuer, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// Create a new user with a hashed password.
    pub async fn register(&self, command: CredentialsCommand) -> Result<RegisterResult, AppError> {
        let (username, password) = command.into_parts()?;

        if self.users.find_user_by_username(&username).await?.is_some() {
            tracing::warn!(username = %username, "Registration rejected: user exists");
            return Err(AppError::UserExists);
        }

        let hash = PasswordHash::hash_blocking(password, self.bcrypt_cost).await?;
        let user = User::create(username, hash);

        // A concurrent registration can win between the lookup and the insert.
        match self.users.insert_user(&user).await {
            Ok(()) => {}
            Err(e) if e.is_duplicate() => return Err(AppError::UserExists),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(RegisterResult {
            user_id: user.id,
            username: user.username,
        })
    }

    /// Verify credentials and issue a signed token for the user.
    pub async fn login(&self, command: CredentialsCommand) -> Result<LoginResult, AppError> {
        let (username, password) = command.into_parts()?;

        let user = self
            .users
            .find_user_by_username(&username)
            .await?
            .ok_or(AppError::InvalidUser)?;

        if !user.password.verify_blocking(password).await? {
            tracing::warn!(username = %username, "Login rejected: wrong password");
            return Err(AppError::InvalidPassword);
        }

        let token = self.tokens.issue(&Claims::new(&user.username, &user.id))?;
        tracing::info!(user_id = %user.id, "Login succeeded");

        Ok(LoginResult { token })
    }
}
