use std::sync::Arc;

use models::user::{validate_middle_initial, validate_name};
use models::{NewUser, User};
use tracing::{debug, error, info, instrument};

use super::payloads::{DeletePayload, ListPayload, ShowPayload, UpdatePayload};
use super::repository::UsersRepository;
use crate::errors::ServiceError;

/// Stateless façade over a users repository. Records are fetched per call and never cached.
#[derive(Clone)]
pub struct UsersService {
    repo: Arc<dyn UsersRepository>,
}

impl UsersService {
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self { Self { repo } }

    #[instrument(name = "users.service.show", skip(self), fields(user_id = payload.id))]
    pub async fn show(&self, payload: ShowPayload) -> Result<User, ServiceError> {
        debug!("showing user");
        self.repo.get_by_id(payload.id).await.map_err(surface)
    }

    /// All users, or a single-element list when `payload.id` is set.
    #[instrument(name = "users.service.list", skip(self))]
    pub async fn list(&self, payload: ListPayload) -> Result<Vec<User>, ServiceError> {
        match payload.id {
            Some(id) => {
                let user = self.repo.get_by_id(id).await.map_err(surface)?;
                Ok(vec![user])
            }
            None => {
                let users = self.repo.list().await.map_err(surface)?;
                debug!(count = users.len(), "listed users");
                Ok(users)
            }
        }
    }

    #[instrument(name = "users.service.find_by_name", skip(self))]
    pub async fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<User, ServiceError> {
        self.repo.get_by_name(first_name, last_name).await.map_err(surface)
    }

    /// Add a user and return the whole collection after insertion.
    #[instrument(
        name = "users.service.create",
        skip(self, candidate),
        fields(first_name = %candidate.first_name, last_name = %candidate.last_name)
    )]
    pub async fn create(&self, candidate: NewUser) -> Result<Vec<User>, ServiceError> {
        let candidate = normalize(candidate)?;
        let (created, users) = self.repo.add_and_list(candidate).await.map_err(surface)?;
        info!(user_id = created.id, "user_created");
        Ok(users)
    }

    pub async fn update(&self, payload: UpdatePayload) -> Result<(), ServiceError> {
        debug!(user_id = payload.user.id, "update requested");
        Err(ServiceError::Unimplemented("update user"))
    }

    pub async fn delete(&self, payload: DeletePayload) -> Result<(), ServiceError> {
        debug!(user_id = payload.id, "delete requested");
        Err(ServiceError::Unimplemented("delete user"))
    }
}

fn normalize(candidate: NewUser) -> Result<NewUser, ServiceError> {
    let first_name = candidate.first_name.trim().to_string();
    let last_name = candidate.last_name.trim().to_string();
    let middle_initial = candidate.middle_initial.trim().to_string();
    validate_name("first_name", &first_name)?;
    validate_name("last_name", &last_name)?;
    validate_middle_initial(&middle_initial)?;
    Ok(NewUser { first_name, middle_initial, last_name })
}

/// Keep not-found and conflict outcomes, collapse everything else into `Internal`.
fn surface(e: ServiceError) -> ServiceError {
    match e {
        ServiceError::NotFound(_) | ServiceError::Conflict(_) => e,
        other => {
            error!(error = %other, "repository failure");
            ServiceError::Internal("unexpected store failure".into())
        }
    }
}
