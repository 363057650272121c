//! Validate command - builds a user from the given fields and reports its errors

use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use crate::domain::{User, ValidationErrors};

/// Arguments for the validate command
#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Field as `name=value`; repeat for each field
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Fields as a JSON object instead of `--field` pairs
    #[arg(long, conflicts_with = "fields")]
    pub json: Option<String>,
}

/// Printed result of a validation run
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: ValidationErrors,
    pub messages: Vec<String>,
}

impl ValidationReport {
    pub fn for_user(user: &User) -> Self {
        let errors = user.validate();

        Self {
            valid: errors.is_empty(),
            messages: errors.full_messages(),
            errors,
        }
    }
}

/// Print the report as JSON. Exits with 1 when the user is invalid.
pub fn run(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let user = build_user(&args)?;
    let report = ValidationReport::for_user(&user);

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn build_user(args: &ValidateArgs) -> anyhow::Result<User> {
    match &args.json {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("--json is not valid JSON")?;
            Ok(User::from_json(&value))
        }
        None => Ok(User::from_fields(args.fields.iter().cloned())),
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got `{}`", raw))
}
