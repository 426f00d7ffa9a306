/// Integration tests for the TaskVault API
///
/// The first group runs hermetically over a pool that cannot connect and
/// exercises everything that resolves before the database: the
/// authentication gate, request validation, the health check's degraded
/// mode, and the unavailable-database mapping.
///
/// The second group needs a real database and is gated on
/// `TEST_DATABASE_URL`; each of those tests returns early when the
/// variable is unset.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::TestContext;
use serde_json::json;
use tower::ServiceExt;

use taskvault_api::app::build_router;

// Gate behavior, no database needed

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = build_router(common::offline_state());

    let request = Request::builder()
        .method("GET")
        .uri("/tasks/get")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );

    let json = common::body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["status"], 401);
}

#[tokio::test]
async fn test_non_bearer_header_is_unauthorized() {
    let app = build_router(common::offline_state());

    let request = Request::builder()
        .method("GET")
        .uri("/tasks/get")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = build_router(common::offline_state());

    let response = app
        .oneshot(common::authed_request("GET", "/tasks/get", "not.a.token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = build_router(common::offline_state());
    let token = common::make_token(1, -60);

    let response = app
        .oneshot(common::authed_request("GET", "/tasks/get", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = common::body_json(response).await;
    assert_eq!(json["message"], "Token has expired");
}

#[tokio::test]
async fn test_update_status_requires_token() {
    let app = build_router(common::offline_state());

    let request = common::json_request(
        "PUT",
        "/users/update-status",
        json!({"is_active": false}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// Validation, no database needed

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let app = build_router(common::offline_state());

    let request = common::json_request(
        "POST",
        "/users/register",
        json!({
            "username": "alice",
            "email": "not-an-email",
            "password": "long-enough-password",
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = common::body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["details"][0]["field"], "email");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = build_router(common::offline_state());

    let request = common::json_request(
        "POST",
        "/users/register",
        json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "short",
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_task_rejects_empty_title() {
    let app = build_router(common::offline_state());
    let token = common::make_token(1, 15);

    let request = common::authed_json_request(
        "POST",
        "/tasks/create",
        &token,
        json!({"title": ""}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// Degraded infrastructure

#[tokio::test]
async fn test_health_reports_degraded_without_database() {
    let app = build_router(common::offline_state());

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database"], "disconnected");
}

#[tokio::test]
async fn test_register_without_database_is_unavailable() {
    let app = build_router(common::offline_state());

    let request = common::json_request(
        "POST",
        "/users/register",
        json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "long-enough-password",
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = common::body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["status"], 503);
}

// End-to-end tests, gated on TEST_DATABASE_URL

#[tokio::test]
async fn test_register_login_create_list() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };

    let token = ctx.register_and_login().await;

    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_json_request(
            "POST",
            "/tasks/create",
            &token,
            json!({"title": "buy milk", "description": "two liters"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = common::body_json(response).await;
    assert!(json["data"]["task_id"].is_number());

    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_request("GET", "/tasks/get", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let tasks = json["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "buy milk");
    assert_eq!(tasks[0]["completed"], false);
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };

    let password = "test-password-123";
    let email = ctx.register_user(password).await;

    let response = ctx
        .app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/users/register",
            json!({
                "username": "someone-else",
                "email": email,
                "password": password,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };

    let email = ctx.register_user("correct-password").await;

    let wrong_password = ctx
        .app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/users/login",
            json!({"email_or_username": email, "password": "wrong-password"}),
        ))
        .await
        .unwrap();

    let unknown_user = ctx
        .app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/users/login",
            json!({"email_or_username": "nobody@example.com", "password": "wrong-password"}),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    // Byte-identical bodies: nothing reveals whether the account exists.
    let body_a = common::body_bytes(wrong_password).await;
    let body_b = common::body_bytes(unknown_user).await;
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn test_login_works_with_username() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };

    let password = "test-password-123";
    let email = ctx.register_user(password).await;

    // Fetch the username the register helper generated for this email.
    let (username,): (String,) =
        sqlx::query_as("SELECT username FROM users WHERE email = $1")
            .bind(&email)
            .fetch_one(&ctx.db)
            .await
            .unwrap();

    let token = ctx.login(&username, password).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_update_and_delete_own_task() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };

    let token = ctx.register_and_login().await;

    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_json_request(
            "POST",
            "/tasks/create",
            &token,
            json!({"title": "draft"}),
        ))
        .await
        .unwrap();
    let task_id = common::body_json(response).await["data"]["task_id"]
        .as_i64()
        .unwrap();

    // Partial update: only the completed flag changes.
    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_json_request(
            "PUT",
            &format!("/tasks/update?task_id={}", task_id),
            &token,
            json!({"completed": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_request("GET", "/tasks/get", &token))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    let task = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"].as_i64() == Some(task_id))
        .expect("created task should be listed");
    assert_eq!(task["title"], "draft");
    assert_eq!(task["completed"], true);

    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_request(
            "DELETE",
            &format!("/tasks/delete?task_id={}", task_id),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Deleting again reports not found.
    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_request(
            "DELETE",
            &format!("/tasks/delete?task_id={}", task_id),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_other_users_tasks_are_invisible() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };

    let owner_token = ctx.register_and_login().await;
    let intruder_token = ctx.register_and_login().await;

    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_json_request(
            "POST",
            "/tasks/create",
            &owner_token,
            json!({"title": "private"}),
        ))
        .await
        .unwrap();
    let task_id = common::body_json(response).await["data"]["task_id"]
        .as_i64()
        .unwrap();

    // Another user's update, delete, and list all act as if the task
    // does not exist.
    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_json_request(
            "PUT",
            &format!("/tasks/update?task_id={}", task_id),
            &intruder_token,
            json!({"title": "hijacked"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_request(
            "DELETE",
            &format!("/tasks/delete?task_id={}", task_id),
            &intruder_token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_request("GET", "/tasks/get", &intruder_token))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    // The owner still sees the unchanged task.
    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_request("GET", "/tasks/get", &owner_token))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    let tasks = json["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "private");
}

#[tokio::test]
async fn test_empty_task_list_is_ok() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };

    let token = ctx.register_and_login().await;

    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_request("GET", "/tasks/get", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_own_status() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };

    let password = "test-password-123";
    let email = ctx.register_user(password).await;
    let token = ctx.login(&email, password).await;

    let response = ctx
        .app
        .clone()
        .oneshot(common::authed_json_request(
            "PUT",
            "/users/update-status",
            &token,
            json!({"is_active": false}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (is_active,): (bool,) = sqlx::query_as("SELECT is_active FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert!(!is_active);
}
