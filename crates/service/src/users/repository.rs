use async_trait::async_trait;
use models::{NewUser, User, UserStore};

use crate::errors::ServiceError;

/// Repository abstraction over user persistence.
/// The in-memory `UserStore` is the only production implementation.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn add(&self, candidate: NewUser) -> Result<User, ServiceError>;
    /// Insert and return the stored record plus the collection as of that insert.
    async fn add_and_list(&self, candidate: NewUser) -> Result<(User, Vec<User>), ServiceError>;
    async fn get_by_id(&self, id: i64) -> Result<User, ServiceError>;
    async fn get_by_name(&self, first_name: &str, last_name: &str) -> Result<User, ServiceError>;
    async fn list(&self) -> Result<Vec<User>, ServiceError>;
    async fn update(&self, record: User) -> Result<User, ServiceError>;
}

#[async_trait]
impl UsersRepository for UserStore {
    async fn add(&self, candidate: NewUser) -> Result<User, ServiceError> {
        Ok(UserStore::add(self, candidate).await?)
    }

    async fn add_and_list(&self, candidate: NewUser) -> Result<(User, Vec<User>), ServiceError> {
        Ok(UserStore::add_and_list(self, candidate).await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<User, ServiceError> {
        Ok(UserStore::get_by_id(self, id).await?)
    }

    async fn get_by_name(&self, first_name: &str, last_name: &str) -> Result<User, ServiceError> {
        Ok(UserStore::get_by_name(self, first_name, last_name).await?)
    }

    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        Ok(UserStore::list(self).await)
    }

    async fn update(&self, record: User) -> Result<User, ServiceError> {
        Ok(UserStore::update(self, record).await?)
    }
}

/// Repositories for tests that need failure paths the in-memory store never takes.
pub mod mock {
    use super::*;

    /// Every call fails as if the backend were unreachable.
    #[derive(Default)]
    pub struct UnavailableRepository;

    #[async_trait]
    impl UsersRepository for UnavailableRepository {
        async fn add(&self, _candidate: NewUser) -> Result<User, ServiceError> {
            Err(ServiceError::Internal("backend unavailable".into()))
        }
        async fn add_and_list(&self, _candidate: NewUser) -> Result<(User, Vec<User>), ServiceError> {
            Err(ServiceError::Internal("backend unavailable".into()))
        }
        async fn get_by_id(&self, _id: i64) -> Result<User, ServiceError> {
            Err(ServiceError::Internal("backend unavailable".into()))
        }
        async fn get_by_name(&self, _first_name: &str, _last_name: &str) -> Result<User, ServiceError> {
            Err(ServiceError::Internal("backend unavailable".into()))
        }
        async fn list(&self) -> Result<Vec<User>, ServiceError> {
            Err(ServiceError::Internal("backend unavailable".into()))
        }
        async fn update(&self, _record: User) -> Result<User, ServiceError> {
            Err(ServiceError::Internal("backend unavailable".into()))
        }
    }
}
