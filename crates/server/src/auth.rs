use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use configs::AuthConfig;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::errors::ApiError;

/// Static shared-secret check on a path prefix.
///
/// Without a key every request passes. With a key, requests under `protected_prefix`
/// must carry exactly that key in `Authorization`; other paths always pass.
#[derive(Clone, Debug)]
pub struct ApiKeyGate {
    key: Option<Arc<str>>,
    protected_prefix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    Reject,
}

impl ApiKeyGate {
    pub fn disabled() -> Self {
        Self { key: None, protected_prefix: configs::DEFAULT_PROTECTED_PREFIX.to_string() }
    }

    pub fn new(key: impl Into<String>, protected_prefix: impl Into<String>) -> Self {
        let key: String = key.into();
        Self { key: Some(Arc::from(key)), protected_prefix: protected_prefix.into() }
    }

    pub fn from_config(cfg: &AuthConfig) -> Self {
        match cfg.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            Some(key) => Self::new(key, cfg.protected_prefix.clone()),
            None => Self { key: None, protected_prefix: cfg.protected_prefix.clone() },
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.key.is_some()
    }

    pub fn check(&self, path: &str, credential: Option<&str>) -> GateDecision {
        let Some(key) = self.key.as_deref() else {
            return GateDecision::Pass;
        };
        if !path.starts_with(&self.protected_prefix) {
            return GateDecision::Pass;
        }
        match credential {
            Some(c) if bool::from(c.as_bytes().ct_eq(key.as_bytes())) => GateDecision::Pass,
            _ => GateDecision::Reject,
        }
    }
}

/// Middleware: enforce the gate before the request reaches any handler
pub async fn require_api_key(
    State(gate): State<Arc<ApiKeyGate>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credential = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let presented = credential.is_some();
    let decision = gate.check(req.uri().path(), credential);
    match decision {
        GateDecision::Pass => Ok(next.run(req).await),
        GateDecision::Reject => {
            if !presented {
                debug!(path = %req.uri().path(), "missing api key");
            } else {
                warn!(path = %req.uri().path(), "invalid api key");
            }
            Err(ApiError::unauthorized())
        }
    }
}
