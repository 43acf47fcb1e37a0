//! API Integration Tests

use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;

use common::{send, setup_app};

async fn register_and_login(app: &axum::Router, username: &str, password: &str) -> String {
    let body = json!({ "username": username, "password": password });

    let response = send(app, Method::POST, "/register/", Some(body.clone()), None).await;
    assert_eq!(response.status, StatusCode::CREATED, "registration failed");

    let response = send(app, Method::POST, "/login", Some(body), None).await;
    assert_eq!(response.status, StatusCode::OK, "login failed");
    response.json()["jwt_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_register_and_login() {
    let app = setup_app(false).await;
    let body = json!({ "username": "alice", "password": "hunter2" });

    let response = send(&app, Method::POST, "/register/", Some(body.clone()), None).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["message"], "User registered successfully");
    assert!(!response.text.contains("hunter2"));

    let response = send(&app, Method::POST, "/login", Some(body), None).await;
    assert_eq!(response.status, StatusCode::OK);
    let token = response.json()["jwt_token"].as_str().unwrap().to_string();
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = setup_app(false).await;
    let body = json!({ "username": "alice", "password": "hunter2" });

    let first = send(&app, Method::POST, "/register/", Some(body.clone()), None).await;
    let second = send(&app, Method::POST, "/register", Some(body), None).await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.json()["error_msg"], "User already exists");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = setup_app(false).await;

    let response = send(
        &app,
        Method::POST,
        "/register/",
        Some(json!({ "username": "alice" })),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error_code"], "missing_fields");
}

#[tokio::test]
async fn test_login_failures() {
    let app = setup_app(false).await;
    register_and_login(&app, "alice", "hunter2").await;

    let wrong_password = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({ "username": "alice", "password": "nope" })),
        None,
    )
    .await;
    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.json()["error_msg"], "Invalid Password");

    let unknown_user = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({ "username": "bob", "password": "hunter2" })),
        None,
    )
    .await;
    assert_eq!(unknown_user.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.json()["error_msg"], "Invalid user");
}

#[tokio::test]
async fn test_transaction_crud_e2e() {
    let app = setup_app(false).await;

    // 1. Create
    let input = json!({
        "type": "expense",
        "category": "groceries",
        "amount": 52.25,
        "date": "2024-02-10",
        "description": "weekly shop"
    });
    let response = send(&app, Method::POST, "/transactions", Some(input), None).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.json()["id"].as_str().unwrap().to_string();

    // 2. Read back
    let response = send(&app, Method::GET, &format!("/transactions/{}", id), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "id": id,
            "type": "expense",
            "category": "groceries",
            "amount": 52.25,
            "date": "2024-02-10",
            "description": "weekly shop"
        })
    );

    // 3. List
    let response = send(&app, Method::GET, "/transactions", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().as_array().unwrap().len(), 1);

    // 4. Update, resubmitting everything but the amount
    let update = json!({
        "type": "expense",
        "category": "groceries",
        "amount": 60.0,
        "date": "2024-02-10",
        "description": "weekly shop"
    });
    let response = send(&app, Method::PUT, &format!("/transactions/{}", id), Some(update), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Transaction updated");

    let fetched = send(&app, Method::GET, &format!("/transactions/{}", id), None, None)
        .await
        .json();
    assert_eq!(fetched["amount"], 60.0);
    assert_eq!(fetched["category"], "groceries");

    // 5. Delete
    let response = send(&app, Method::DELETE, &format!("/transactions/{}", id), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Transaction deleted");

    let response = send(&app, Method::GET, &format!("/transactions/{}", id), None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_nulls_overwrites_fields() {
    let app = setup_app(false).await;
    let input = json!({ "type": "income", "category": "gift", "amount": 20, "date": "2024-04-01" });
    let id = send(&app, Method::POST, "/transactions", Some(input), None)
        .await
        .json()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(
        &app,
        Method::PUT,
        &format!("/transactions/{}", id),
        Some(json!({ "amount": 25, "category": null })),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let fetched = send(&app, Method::GET, &format!("/transactions/{}", id), None, None)
        .await
        .json();
    assert_eq!(fetched["amount"], 25.0);
    assert!(fetched["type"].is_null());
    assert!(fetched["category"].is_null());
    assert!(fetched["date"].is_null());
}

#[tokio::test]
async fn test_create_missing_fields() {
    let app = setup_app(false).await;

    let response = send(
        &app,
        Method::POST,
        "/transactions",
        Some(json!({ "type": "income", "amount": 5 })),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error_code"], "missing_fields");

    let listed = send(&app, Method::GET, "/transactions", None, None).await.json();
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_malformed_body() {
    let app = setup_app(false).await;

    let response = send(
        &app,
        Method::POST,
        "/transactions",
        Some(json!({ "type": "income", "category": "x", "amount": "lots", "date": "d" })),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error_code"], "invalid_request");
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = setup_app(false).await;
    let body = json!({ "type": "income", "category": "x", "amount": 1, "date": "d" });

    let put = send(&app, Method::PUT, "/transactions/missing", Some(body), None).await;
    let delete = send(&app, Method::DELETE, "/transactions/missing", None, None).await;
    let get = send(&app, Method::GET, "/transactions/missing", None, None).await;

    assert_eq!(put.status, StatusCode::NOT_FOUND);
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
    assert_eq!(get.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_summary() {
    let app = setup_app(false).await;

    let empty = send(&app, Method::GET, "/summary", None, None).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(
        empty.json(),
        json!({ "totalIncome": 0.0, "totalExpense": 0.0, "balance": 0.0 })
    );

    for body in [
        json!({ "type": "income", "category": "salary", "amount": 1000, "date": "2024-01-01" }),
        json!({ "type": "expense", "category": "rent", "amount": 400, "date": "2024-01-02" }),
        json!({ "type": "refund", "category": "shop", "amount": 75, "date": "2024-01-03" }),
    ] {
        let response = send(&app, Method::POST, "/transactions", Some(body), None).await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let summary = send(&app, Method::GET, "/summary", None, None).await.json();
    assert_eq!(summary["totalIncome"], 1000.0);
    assert_eq!(summary["totalExpense"], 400.0);
    assert_eq!(summary["balance"], 600.0);
}

#[tokio::test]
async fn test_routes_public_by_default() {
    let app = setup_app(false).await;

    let response = send(&app, Method::GET, "/transactions", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_guard_requires_token() {
    let app = setup_app(true).await;

    let missing = send(&app, Method::GET, "/transactions", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.json()["error_code"], "missing_token");

    let invalid = send(&app, Method::GET, "/summary", None, Some("not.a.jwt")).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.json()["error_msg"], "Invalid JWT Token");

    let token = register_and_login(&app, "alice", "hunter2").await;
    let allowed = send(&app, Method::GET, "/summary", None, Some(&token)).await;
    assert_eq!(allowed.status, StatusCode::OK);
}

#[tokio::test]
async fn test_guard_rejects_token_signed_with_other_secret() {
    use expense_tracker::auth::{Claims, TokenIssuer};

    let app = setup_app(true).await;
    let forged = TokenIssuer::new(b"MY_SECRET_TOKEN")
        .issue(&Claims::new("mallory", "user-x"))
        .unwrap();

    let response = send(&app, Method::GET, "/transactions", None, Some(&forged)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_auth_routes_stay_open_with_guard() {
    let app = setup_app(true).await;

    let response = send(
        &app,
        Method::POST,
        "/register/",
        Some(json!({ "username": "carol", "password": "pw" })),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_health() {
    let app = setup_app(true).await;

    let response = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "OK");
}
