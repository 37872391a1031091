use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use models::{user::seed_users, UserStore};
use service::UsersService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::auth::ApiKeyGate;
use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Seeded store, service and gate wired into a router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let store = UserStore::with_users(seed_users())
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("seed data rejected: {e}")))?;
    info!(users = store.len().await, "user store seeded");

    let users = UsersService::new(Arc::new(store));
    let gate = ApiKeyGate::from_config(&cfg.auth);
    if gate.is_enabled() {
        info!(prefix = %cfg.auth.protected_prefix, "api key required on protected routes");
    }
    Ok(routes::build_router(AppState::new(users, gate), build_cors()))
}

pub async fn bind(cfg: &AppConfig) -> Result<TcpListener, StartupError> {
    let addr = cfg.bind_addr();
    TcpListener::bind(&addr).await.map_err(|source| StartupError::Bind { addr, source })
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let listener = bind(&cfg).await?;
    info!(addr = %listener.local_addr()?, "starting users api");
    serve_with_shutdown(listener, app, async {
        let _ = tokio::signal::ctrl_c().await;
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    })
    .await
}
