//! User validation rules and the per-field error mapping

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::entity::User;

/// Errors a validation rule can report against a user field
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("can't be blank")]
    MissingRequiredField,
}

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub error: UserValidationError,
}

impl FieldViolation {
    pub fn new(field: &'static str, error: UserValidationError) -> Self {
        Self { field, error }
    }
}

/// A validation rule inspects the current user state and yields at most one violation
pub type ValidationRule = fn(&User) -> Option<FieldViolation>;

/// Rules applied to every user, in declaration order
pub const USER_RULES: &[ValidationRule] = &[email_presence];

/// Email must be present and not blank
pub fn email_presence(user: &User) -> Option<FieldViolation> {
    is_blank(user.email())
        .then(|| FieldViolation::new("email", UserValidationError::MissingRequiredField))
}

/// Absent, empty and whitespace-only values are all blank
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Run every rule against the user and collect the violations
pub fn validate_user(user: &User) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for rule in USER_RULES {
        if let Some(violation) = rule(user) {
            errors.add(violation.field, violation.error.to_string());
        }
    }

    errors
}

/// Field name to ordered violation messages. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the field's sequence
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages for a field, empty if the field is valid or unknown
    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Messages prefixed with the humanized field name, e.g. "Email can't be blank"
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(field, messages)| {
                let name = humanize(field);
                messages.iter().map(move |m| format!("{} {}", name, m))
            })
            .collect()
    }
}

fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
