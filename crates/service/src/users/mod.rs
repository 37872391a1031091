//! Users module: payloads, repository port and the façade service.

pub mod payloads;
pub mod repository;
pub mod service;

pub use payloads::{DeletePayload, ListPayload, ShowPayload, UpdatePayload};
pub use repository::UsersRepository;
pub use service::UsersService;
