//! Account portal
//!
//! A static landing page server plus the user entity and its validation rules:
//! - Users built in memory from field values, never failing on bad input
//! - Ordered rule list producing per-field error messages
//! - Email presence as the enforced rule

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{User, ValidationErrors};
