//! Domain layer - entities and validation free of I/O

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{User, UserValidationError, ValidationErrors};
