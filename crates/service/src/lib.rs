//! Service layer translating user payloads into store calls.
//! - Maps store failures onto a small error taxonomy (`ServiceError`).
//! - Depends on the `UsersRepository` port, not on a concrete store.

pub mod errors;
pub mod users;

pub use errors::ServiceError;
pub use users::{UsersRepository, UsersService};
