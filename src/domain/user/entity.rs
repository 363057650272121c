//! User entity

use serde::Serialize;
use serde_json::Value;

use super::validation::{validate_user, ValidationErrors};
use crate::domain::DomainError;

/// User as submitted for sign-up, held in memory only
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Never exposed in serialization
    #[serde(skip_serializing)]
    password: Option<String>,
    #[serde(skip_serializing)]
    password_confirmation: Option<String>,
}

impl User {
    /// Build a user from field name/value pairs.
    ///
    /// Names are matched after trimming surrounding whitespace. Unknown names
    /// are ignored and missing names stay absent. This never fails;
    /// bad input only shows up later as validation errors.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut user = Self::default();

        for (name, value) in fields {
            user.assign(name.as_ref(), value.into());
        }

        user
    }

    /// Build a user from a JSON object. Non-string values and non-object input
    /// are treated as absent fields.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self::from_fields(
            object
                .iter()
                .filter_map(|(name, value)| value.as_str().map(|s| (name, s))),
        )
    }

    fn assign(&mut self, name: &str, value: String) {
        match name.trim() {
            "email" => self.email = Some(value),
            "password" => self.password = Some(value),
            "password_confirmation" | "passwordConfirmation" => {
                self.password_confirmation = Some(value)
            }
            _ => {}
        }
    }

    // Getters

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn password_confirmation(&self) -> Option<&str> {
        self.password_confirmation.as_deref()
    }

    // Mutators

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub fn set_password(&mut self, password: Option<String>) {
        self.password = password;
    }

    pub fn set_password_confirmation(&mut self, confirmation: Option<String>) {
        self.password_confirmation = confirmation;
    }

    // Validation, recomputed from current state on every call

    pub fn validate(&self) -> ValidationErrors {
        validate_user(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn errors_for(&self, field: &str) -> Vec<String> {
        self.validate().get(field).to_vec()
    }

    /// Fail with a validation error listing every message
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        let errors = self.validate();

        if errors.is_empty() {
            return Ok(());
        }

        Err(DomainError::validation(errors.full_messages().join(", ")))
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");

        f.debug_struct("User")
            .field("email", &self.email)
            .field("password", &redact(&self.password))
            .field("password_confirmation", &redact(&self.password_confirmation))
            .finish()
    }
}
