use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("user named {first_name} {last_name} already exists")]
    DuplicateName { first_name: String, last_name: String },
    #[error("user {0} not found")]
    NotFound(i64),
    #[error("no user named {first_name} {last_name}")]
    UnknownName { first_name: String, last_name: String },
}
