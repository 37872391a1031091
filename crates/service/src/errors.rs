use models::ModelError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not implemented: {0}")]
    Unimplemented(&'static str),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// `what` names the missing thing, e.g. `user 7`.
    pub fn not_found(what: impl std::fmt::Display) -> Self { Self::NotFound(what.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Unimplemented(_) => 1101,
            ServiceError::Internal(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound(id) => ServiceError::not_found(format_args!("user {id}")),
            ModelError::UnknownName { first_name, last_name } => {
                ServiceError::not_found(format_args!("user named {first_name} {last_name}"))
            }
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            dup @ ModelError::DuplicateName { .. } => ServiceError::Conflict(dup.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_class() {
        assert_eq!(ServiceError::from(ModelError::NotFound(7)), ServiceError::NotFound("user 7".into()));
        assert!(matches!(
            ServiceError::from(ModelError::DuplicateName { first_name: "Rob".into(), last_name: "Pike".into() }),
            ServiceError::Conflict(_)
        ));
        assert!(matches!(ServiceError::from(ModelError::Validation("x".into())), ServiceError::Validation(_)));
    }

    #[test]
    fn not_found_message_names_the_lookup_once() {
        assert_eq!(ServiceError::from(ModelError::NotFound(7)).to_string(), "not found: user 7");
        let by_name = ServiceError::from(ModelError::UnknownName {
            first_name: "Ian".into(),
            last_name: "Taylor".into(),
        });
        assert_eq!(by_name.to_string(), "not found: user named Ian Taylor");
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            ServiceError::Validation(String::new()).code(),
            ServiceError::Conflict(String::new()).code(),
            ServiceError::NotFound(String::new()).code(),
            ServiceError::Unimplemented("x").code(),
            ServiceError::Internal(String::new()).code(),
        ];
        let mut sorted = codes.to_vec();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
    }
}
