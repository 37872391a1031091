use std::sync::Arc;

use service::UsersService;

use crate::auth::ApiKeyGate;

/// Shared handler state. Everything inside is either immutable or synchronizes internally.
#[derive(Clone)]
pub struct AppState {
    pub users: UsersService,
    pub gate: Arc<ApiKeyGate>,
}

impl AppState {
    pub fn new(users: UsersService, gate: ApiKeyGate) -> Self {
        Self { users, gate: Arc::new(gate) }
    }
}
