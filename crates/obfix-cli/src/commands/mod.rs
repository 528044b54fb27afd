mod check;
mod generate;
mod schema;

use obfix_core::ValidationIssue;

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::CliError;

pub fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Generate(args) => generate::run(args, cli.format),
        Command::Check(args) => check::run(args, cli.format),
        Command::Schema => schema::run(),
    }
}

/// Surface every issue on stderr and return the validation error carrying
/// the count. The caller has already made sure nothing was written.
fn report_issues(issues: Vec<ValidationIssue>, format: OutputFormat) -> CliError {
    match format {
        OutputFormat::Text => {
            for issue in &issues {
                eprintln!("{issue}");
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&issues) {
            Ok(payload) => eprintln!("{payload}"),
            Err(error) => return CliError::from(error),
        },
    }

    CliError::Validation {
        count: issues.len(),
    }
}
