//! User domain
//!
//! This module provides the user entity and the rules it is validated against.

mod entity;
mod validation;

pub use entity::User;
pub use validation::{
    email_presence, is_blank, validate_user, FieldViolation, UserValidationError,
    ValidationErrors, ValidationRule, USER_RULES,
};
