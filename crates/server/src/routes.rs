use axum::{
    middleware,
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::auth;
use crate::errors::panic_response;
use crate::state::AppState;

pub mod users;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn hello() -> Html<&'static str> {
    Html("<h1>Hello, World!</h1>\n")
}

/// Build the full application router: public routes, the users API, and the API key gate
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(hello))
        .route("/health", get(health));

    let api = Router::new()
        .route("/api/v1/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/v1/users/:id",
            get(users::get_user).put(users::update_user).delete(users::delete_user),
        );

    public
        .merge(api)
        .layer(middleware::from_fn_with_state(state.gate.clone(), auth::require_api_key))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
