use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use models::{NewUser, User};
use serde::Deserialize;
use service::users::{DeletePayload, ListPayload, ShowPayload, UpdatePayload};
use tracing::debug;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub id: Option<String>,
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::bad_id())
}

/// GET /api/v1/users[?id=N]
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<User>>, ApiError> {
    let Query(q) = query.map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.body_text()))?;
    let id = match q.id.as_deref() {
        Some(raw) if !raw.is_empty() => Some(parse_id(raw)?),
        _ => None,
    };
    debug!(?id, "list users");
    let users = state.users.list(ListPayload { id }).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    debug!(id, "get user");
    let user = state.users.show(ShowPayload { id }).await?;
    Ok(Json(user))
}

/// POST /api/v1/users, responds with the whole collection after insertion
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<User>>), ApiError> {
    let Json(candidate) = body.map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.body_text()))?;
    let users = state.users.create(candidate).await?;
    Ok((StatusCode::CREATED, Json(users)))
}

/// PUT /api/v1/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let Json(fields) = body.map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.body_text()))?;
    let user = User {
        id,
        first_name: fields.first_name,
        middle_initial: fields.middle_initial,
        last_name: fields.last_name,
        created_at: Default::default(),
        updated_at: Default::default(),
    };
    state.users.update(UpdatePayload { user }).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.users.delete(DeletePayload { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
