use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A stored user. `id` and both timestamps are owned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub middle_initial: String,
    pub last_name: String,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// `Last, First M`, or `Last, First` when there is no middle initial.
    pub fn display_name(&self) -> String {
        if self.middle_initial.is_empty() {
            format!("{}, {}", self.last_name, self.first_name)
        } else {
            format!("{}, {} {}", self.last_name, self.first_name, self.middle_initial)
        }
    }

    pub fn same_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

/// Caller-supplied fields for a user that does not exist yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    #[serde(default)]
    pub middle_initial: String,
    pub last_name: String,
}

impl NewUser {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), middle_initial: String::new(), last_name: last_name.into() }
    }

    pub fn with_middle_initial(mut self, initial: impl Into<String>) -> Self {
        self.middle_initial = initial.into();
        self
    }
}

pub fn validate_name(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

pub fn validate_middle_initial(value: &str) -> Result<(), ModelError> {
    if value.chars().count() > 1 {
        return Err(ModelError::Validation("middle_initial must be a single character".into()));
    }
    Ok(())
}

/// Users loaded into a fresh store at startup.
pub fn seed_users() -> Vec<NewUser> {
    vec![
        NewUser::new("Rob", "Pike"),
        NewUser::new("Ken", "Thompson"),
        NewUser::new("Robert", "Griesemer"),
        NewUser::new("Russ", "Cox").with_middle_initial("S"),
    ]
}
