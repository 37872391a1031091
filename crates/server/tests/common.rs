#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::AppConfig;
use tower::ServiceExt;

pub async fn app_with_key(api_key: Option<&str>) -> anyhow::Result<Router> {
    let mut cfg = AppConfig::default();
    cfg.auth.api_key = api_key.map(str::to_string);
    Ok(server::startup::build_app(&cfg).await?)
}

pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await?;
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok((status, body))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).expect("request")
}

pub fn get_with_key(uri: &str, key: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", key)
        .body(Body::empty())
        .expect("request")
}

pub fn json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}
