//! Common test utilities

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt;

use expense_tracker::store::SqliteStore;
use expense_tracker::{build_router, db, AppState, Config};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Schema the service expects to find already provisioned
const USERS_TABLE: &str = r#"
    CREATE TABLE users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

fn transactions_table(amount_type: &str) -> String {
    format!(
        r#"
        CREATE TABLE transactions (
            id TEXT PRIMARY KEY,
            type TEXT,
            category TEXT,
            amount {},
            date TEXT,
            description TEXT
        )
        "#,
        amount_type
    )
}

pub fn test_config(require_auth: bool) -> Config {
    Config::from_vars(|name| match name {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        "REQUIRE_AUTH" => Some(require_auth.to_string()),
        _ => None,
    })
    .expect("test config is valid")
}

/// Open a fresh in-memory database with the schema applied
pub async fn setup_test_db() -> SqlitePool {
    setup_test_db_with_amount_type("REAL").await
}

/// Same as [`setup_test_db`], with `amount` declared as `amount_type`
pub async fn setup_test_db_with_amount_type(amount_type: &str) -> SqlitePool {
    let pool = db::connect(&test_config(false))
        .await
        .expect("Failed to open in-memory DB");

    for statement in [USERS_TABLE.to_string(), transactions_table(amount_type)] {
        sqlx::query(&statement)
            .execute(&pool)
            .await
            .expect("Failed to create schema");
    }

    pool
}

/// Router over a fresh database
pub async fn setup_app(require_auth: bool) -> Router {
    let pool = setup_test_db().await;
    let store = Arc::new(SqliteStore::new(pool));
    let config = test_config(require_auth);

    build_router(AppState::new(store.clone(), store, &config), config.require_auth)
}

/// Response status plus the body, parsed as JSON when possible
pub struct TestResponse {
    pub status: StatusCode,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).expect("response body is JSON")
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        text: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
