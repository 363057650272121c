//! CLI module for the account portal
//!
//! Provides subcommands:
//! - `serve`: run the HTTP server (default)
//! - `validate`: check user fields against the validation rules

pub mod serve;
pub mod validate;

use clap::{Parser, Subcommand};

/// Account portal - landing page server and user validation
#[derive(Parser)]
#[command(name = "account-portal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The chosen subcommand, `serve` when none was given
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(serve::ServeArgs::default()))
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default mode)
    Serve(serve::ServeArgs),

    /// Validate user fields and print the errors as JSON
    Validate(validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["account-portal"]).unwrap();
        assert!(cli.command.is_none());

        let Command::Serve(args) = cli.command_or_default() else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, None);
    }

    #[test]
    fn test_explicit_subcommand_kept() {
        let cli = Cli::try_parse_from(["account-portal", "validate"]).unwrap();
        assert!(matches!(cli.command_or_default(), Command::Validate(_)));
    }

    #[test]
    fn test_validate_fields() {
        let cli = Cli::try_parse_from([
            "account-portal",
            "validate",
            "--field",
            "email=a@example.com",
            "--field",
            "password=password123",
        ])
        .unwrap();

        let Some(Command::Validate(args)) = cli.command else {
            panic!("expected validate command");
        };
        assert_eq!(
            args.fields,
            vec![
                ("email".to_string(), "a@example.com".to_string()),
                ("password".to_string(), "password123".to_string()),
            ]
        );
    }

    #[test]
    fn test_field_without_separator_rejected() {
        let result = Cli::try_parse_from(["account-portal", "validate", "--field", "email"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_conflicts_with_fields() {
        let result = Cli::try_parse_from([
            "account-portal",
            "validate",
            "--json",
            "{}",
            "--field",
            "email=a",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::try_parse_from(["account-portal", "serve", "--port", "3000"]).unwrap();

        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, Some(3000));
    }
}
