//! User records and the in-memory table that owns them.

pub mod errors;
pub mod store;
pub mod user;

pub use errors::ModelError;
pub use store::UserStore;
pub use user::{NewUser, User};
