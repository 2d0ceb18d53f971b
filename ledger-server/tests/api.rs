//! End-to-end API tests
//!
//! Drives the full router against a throwaway SQLite database.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use ledger_server::api;
use ledger_server::core::{Config, ServerState};

const USERNAME: &str = "associacao2025";
const PASSWORD: &str = "associacao123";

async fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        work_dir: dir.path().to_string_lossy().into_owned(),
        http_port: 0,
        admin_username: USERNAME.into(),
        admin_password: PASSWORD.into(),
        session_ttl: Duration::from_secs(3600),
        environment: "test".into(),
    };
    let state = ServerState::initialize(&config).await.unwrap();
    (api::create_router(state), dir)
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let request = match body {
        Some(b) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({"username": USERNAME, "password": PASSWORD})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn login_issues_token_that_validates_until_logout() {
    let (app, _dir) = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(&app, "GET", "/api/admin/status", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], json!(true));

    let (status, body) = send(&app, "POST", "/api/admin/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    // Same token no longer validates
    let (status, body) = send(&app, "GET", "/api/admin/status", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["authenticated"], json!(false));
}

#[tokio::test]
async fn login_rejects_wrong_credentials() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({"username": USERNAME, "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Credenciais inválidas"));
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn logout_without_token_still_succeeds() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(&app, "POST", "/api/admin/logout", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn payment_create_and_list_roundtrip() {
    let (app, _dir) = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        Some(&token),
        Some(json!({"member_name": "Ana Silva", "amount": 50.00, "payment_date": "2024-03-10"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);

    let (status, body) = send(&app, "GET", "/api/payments", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let payments = body["payments"].as_array().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0]["id"].as_i64().unwrap(), id);
    assert_eq!(payments[0]["member_name"], json!("Ana Silva"));
    assert_eq!(payments[0]["amount"].as_f64().unwrap(), 50.00);
}

#[tokio::test]
async fn payments_are_ordered_by_date_then_creation_desc() {
    let (app, _dir) = test_app().await;
    let token = login(&app).await;

    for (name, date) in [
        ("Primeiro", "2024-01-10"),
        ("Terceiro", "2024-03-10"),
        ("Segundo", "2024-02-10"),
    ] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/payments",
            Some(&token),
            Some(json!({"member_name": name, "amount": 10.0, "payment_date": date})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&app, "GET", "/api/payments", None, None).await;
    let names: Vec<&str> = body["payments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["member_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Terceiro", "Segundo", "Primeiro"]);
}

#[tokio::test]
async fn payment_rejects_non_positive_or_non_numeric_amount() {
    let (app, _dir) = test_app().await;
    let token = login(&app).await;

    for amount in [json!(0), json!(-5.0)] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/payments",
            Some(&token),
            Some(json!({"member_name": "Ana", "amount": amount, "payment_date": "2024-03-10"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Valor deve ser positivo"));
    }

    // Non-numeric amount fails JSON deserialization, still a 400
    let (status, _) = send(
        &app,
        "POST",
        "/api/payments",
        Some(&token),
        Some(json!({"member_name": "Ana", "amount": "fifty", "payment_date": "2024-03-10"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // No row was inserted by any rejected request
    let (_, body) = send(&app, "GET", "/api/payments", None, None).await;
    assert!(body["payments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn payment_requires_member_name_and_date() {
    let (app, _dir) = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        Some(&token),
        Some(json!({"member_name": "  ", "amount": 10.0, "payment_date": "2024-03-10"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Nome é obrigatório"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        Some(&token),
        Some(json!({"member_name": "Ana", "amount": 10.0, "payment_date": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Data é obrigatória"));
}

#[tokio::test]
async fn admin_routes_short_circuit_without_valid_token() {
    let (app, _dir) = test_app().await;

    let cases = [
        ("POST", "/api/payments".to_string(),
         Some(json!({"member_name": "Ana", "amount": 10.0, "payment_date": "2024-03-10"}))),
        ("POST", "/api/members".to_string(), Some(json!({"name": "Ana"}))),
        ("GET", "/api/members/all".to_string(), None),
        ("PUT", "/api/members/1".to_string(), Some(json!({"name": "Ana"}))),
        ("DELETE", "/api/members/1".to_string(), None),
    ];

    for (method, path, body) in cases {
        // No token at all
        let (status, resp) = send(&app, method, &path, None, body.clone()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert!(resp["error"].as_str().unwrap().contains("Missing token"));

        // Garbage token
        let (status, resp) = send(&app, method, &path, Some("deadbeef"), body.clone()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert!(resp["error"].as_str().unwrap().contains("Invalid token"));
    }

    // Nothing was written
    let (_, body) = send(&app, "GET", "/api/payments", None, None).await;
    assert!(body["payments"].as_array().unwrap().is_empty());
    let (_, body) = send(&app, "GET", "/api/members", None, None).await;
    assert!(body["members"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn member_create_requires_name_and_valid_email() {
    let (app, _dir) = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(&token),
        Some(json!({"name": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Nome é obrigatório"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(&token),
        Some(json!({"name": "Ana", "email": "not-an-email"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Email inválido"));

    // No row was created
    let (_, body) = send(&app, "GET", "/api/members", None, None).await;
    assert!(body["members"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_member_name_is_rejected_even_after_deactivation() {
    let (app, _dir) = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(&token),
        Some(json!({"name": "Ana Silva", "email": "ana@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(&token),
        Some(json!({"name": "Ana Silva"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Já existe um membro com este nome"));

    // Name stays reserved while the member is inactive
    let (status, _) = send(&app, "DELETE", &format!("/api/members/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(&token),
        Some(json!({"name": "Ana Silva"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Já existe um membro com este nome"));
}

#[tokio::test]
async fn member_list_is_active_only_and_name_sorted() {
    let (app, _dir) = test_app().await;
    let token = login(&app).await;

    for name in ["Carla", "Ana", "Bruno"] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/members",
            Some(&token),
            Some(json!({"name": name})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&app, "GET", "/api/members", None, None).await;
    let names: Vec<&str> = body["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);
}

#[tokio::test]
async fn deactivation_hides_member_but_keeps_their_payments() {
    let (app, _dir) = test_app().await;
    let token = login(&app).await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(&token),
        Some(json!({"name": "Ana Silva"})),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "POST",
        "/api/payments",
        Some(&token),
        Some(json!({"member_name": "Ana Silva", "amount": 50.0, "payment_date": "2024-03-10"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", &format!("/api/members/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    // Gone from the member list...
    let (_, body) = send(&app, "GET", "/api/members", None, None).await;
    assert!(body["members"].as_array().unwrap().is_empty());

    // ...still visible in the admin listing, flagged inactive...
    let (_, body) = send(&app, "GET", "/api/members/all", Some(&token), None).await;
    let all = body["members"].as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["name"], json!("Ana Silva"));
    assert_eq!(all[0]["is_active"], json!(false));

    // ...but historical payments keep the name
    let (_, body) = send(&app, "GET", "/api/payments", None, None).await;
    let payments = body["payments"].as_array().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0]["member_name"], json!("Ana Silva"));
}

#[tokio::test]
async fn member_update_edits_fields_and_toggles_active() {
    let (app, _dir) = test_app().await;
    let token = login(&app).await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(&token),
        Some(json!({"name": "Ana"})),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    // Rename and deactivate in one edit
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/members/{id}"),
        Some(&token),
        Some(json!({"name": "Ana Souza", "phone": "912345678", "is_active": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (_, body) = send(&app, "GET", "/api/members", None, None).await;
    assert!(body["members"].as_array().unwrap().is_empty());

    // Omitting is_active reactivates
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/members/{id}"),
        Some(&token),
        Some(json!({"name": "Ana Souza", "phone": "912345678"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/members", None, None).await;
    let members = body["members"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["name"], json!("Ana Souza"));
    assert_eq!(members[0]["phone"], json!("912345678"));
    assert_eq!(members[0]["is_active"], json!(true));
}
