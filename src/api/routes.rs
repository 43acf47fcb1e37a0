//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::domain::{Summary, Transaction, TransactionFields};
use crate::error::AppError;
use crate::services::{CreateTransactionResult, CredentialsCommand};

use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub jwt_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
    pub id: String,
}

impl From<CreateTransactionResult> for CreateTransactionResponse {
    fn from(result: CreateTransactionResult) -> Self {
        Self { id: result.id }
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Register and login; never behind the auth guard.
pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/register/", post(register))
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Transaction CRUD and summary.
pub fn transaction_router() -> Router<AppState> {
    Router::new()
        .route("/transactions", post(create_transaction).get(list_transactions))
        .route(
            "/transactions/:id",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        .route("/summary", get(get_summary))
}

// =========================================================================
// POST /register/
// =========================================================================

async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsCommand>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(command) = payload?;

    state.auth.register(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

// =========================================================================
// POST /login
// =========================================================================

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsCommand>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(command) = payload?;

    let result = state.auth.login(command).await?;

    Ok(Json(LoginResponse {
        jwt_token: result.token,
    }))
}

// =========================================================================
// POST /transactions
// =========================================================================

async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<TransactionFields>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateTransactionResponse>), AppError> {
    let Json(fields) = payload?;

    let result = state.transactions.create(fields).await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

// =========================================================================
// GET /transactions
// =========================================================================

async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    Ok(Json(state.transactions.list().await?))
}

// =========================================================================
// GET /transactions/:id
// =========================================================================

async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, AppError> {
    Ok(Json(state.transactions.get_by_id(&id).await?))
}

// =========================================================================
// PUT /transactions/:id
// =========================================================================

async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TransactionFields>, JsonRejection>,
) -> Result<&'static str, AppError> {
    let Json(fields) = payload?;

    state.transactions.update(&id, fields).await?;

    Ok("Transaction updated")
}

// =========================================================================
// DELETE /transactions/:id
// =========================================================================

async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, AppError> {
    state.transactions.delete(&id).await?;

    Ok("Transaction deleted")
}

// =========================================================================
// GET /summary
// =========================================================================

async fn get_summary(State(state): State<AppState>) -> Result<Json<Summary>, AppError> {
    Ok(Json(state.transactions.summary().await?))
}
