mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app_with_key, get, json, send};

#[tokio::test]
async fn lists_seeded_users_in_order() -> anyhow::Result<()> {
    let app = app_with_key(None).await?;
    let (status, body) = send(&app, get("/api/v1/users")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "first_name": "Rob", "last_name": "Pike"},
            {"id": 2, "first_name": "Ken", "last_name": "Thompson"},
            {"id": 3, "first_name": "Robert", "last_name": "Griesemer"},
            {"id": 4, "first_name": "Russ", "middle_initial": "S", "last_name": "Cox"},
        ])
    );
    Ok(())
}

#[tokio::test]
async fn get_user_by_path_id() -> anyhow::Result<()> {
    let app = app_with_key(None).await?;
    let (status, body) = send(&app, get("/api/v1/users/2")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["last_name"], "Thompson");
    assert!(body.get("created_at").is_none());

    let (status, _) = send(&app, get("/api/v1/users/99")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/api/v1/users/abc")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Expected id as an integer.");
    Ok(())
}

#[tokio::test]
async fn list_with_id_filter() -> anyhow::Result<()> {
    let app = app_with_key(None).await?;
    let (status, body) = send(&app, get("/api/v1/users?id=3")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 3, "first_name": "Robert", "last_name": "Griesemer"}]));

    let (status, _) = send(&app, get("/api/v1/users?id=42")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/api/v1/users?id=x")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn create_then_conflict() -> anyhow::Result<()> {
    let app = app_with_key(None).await?;
    let (status, body) = send(
        &app,
        json("POST", "/api/v1/users", json!({"first_name": "Ian", "middle_initial": "L", "last_name": "Taylor"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let users = body.as_array().cloned().unwrap_or_default();
    assert_eq!(users.len(), 5);
    assert_eq!(users[4]["id"], 5);

    let (status, body) = send(&app, json("POST", "/api/v1/users", json!({"first_name": "Ian", "last_name": "Taylor"}))).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap_or_default().contains("already exists"));

    let (_, body) = send(&app, get("/api/v1/users")).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(5));
    Ok(())
}

#[tokio::test]
async fn create_rejects_bad_payloads() -> anyhow::Result<()> {
    let app = app_with_key(None).await?;
    let (status, _) = send(&app, json("POST", "/api/v1/users", json!({"first_name": "Solo"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, json("POST", "/api/v1/users", json!({"first_name": " ", "last_name": "Pike"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "first_name required");
    Ok(())
}

#[tokio::test]
async fn update_and_delete_report_not_implemented() -> anyhow::Result<()> {
    let app = app_with_key(None).await?;
    let (status, _) = send(&app, json("PUT", "/api/v1/users/1", json!({"first_name": "R", "last_name": "P"}))).await?;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

    let req = axum::http::Request::builder()
        .method("DELETE")
        .uri("/api/v1/users/1")
        .body(axum::body::Body::empty())?;
    let (status, _) = send(&app, req).await?;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

    let req = axum::http::Request::builder()
        .method("DELETE")
        .uri("/api/v1/users/abc")
        .body(axum::body::Body::empty())?;
    let (status, _) = send(&app, req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, get("/api/v1/users/1")).await?;
    assert_eq!(body["first_name"], "Rob");
    Ok(())
}

#[tokio::test]
async fn public_routes() -> anyhow::Result<()> {
    let app = app_with_key(None).await?;
    let (status, body) = send(&app, get("/health")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, get("/")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().unwrap_or_default().contains("Hello, World!"));
    Ok(())
}

#[tokio::test]
async fn padded_ids_are_rejected() -> anyhow::Result<()> {
    let app = app_with_key(None).await?;
    let (status, body) = send(&app, get("/api/v1/users/%202")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Expected id as an integer.");

    let (status, _) = send(&app, get("/api/v1/users?id=%202")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn malformed_query_gets_json_error_body() -> anyhow::Result<()> {
    let app = app_with_key(None).await?;
    let (status, body) = send(&app, get("/api/v1/users?id=1&id=2")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "expected JSON error body, got {body}");
    Ok(())
}

#[tokio::test]
async fn handler_panic_becomes_json_500() -> anyhow::Result<()> {
    use axum::routing::get as route_get;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    let app = axum::Router::new()
        .route("/explode", route_get(explode))
        .layer(CatchPanicLayer::custom(server::errors::panic_response));
    let (status, body) = send(&app, get("/explode")).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Something went wrong."}));
    Ok(())
}
