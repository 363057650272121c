use std::process::ExitCode;

use account_portal::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command_or_default() {
        Command::Serve(args) => {
            cli::serve::run(args).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate(args) => cli::validate::run(args),
    }
}
