//! CLI argument definitions for obfix.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `generate` | Validate a submission and write the fixture file |
//! | `check` | Validate a submission without writing anything |
//! | `schema` | Print the table roles, columns, and enumerated values |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Issue/report output format (text, json) |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// obfix - orderbook test fixture generator
///
/// Validates tabular order/book/trade submissions and serializes them into
/// the fixed-format text fixtures consumed by the matching-engine test
/// runner.
#[derive(Debug, Parser)]
#[command(name = "obfix", version, about = "Orderbook test fixture generator")]
pub struct Cli {
    /// Output format for validation reports.
    ///
    /// - text: one human-readable line per issue (default)
    /// - json: structured issue objects
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Validation report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per issue.
    Text,
    /// Structured JSON issue objects.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a submission and write `<test name>.txt`.
    ///
    /// On validation failure every issue is reported and no file is written.
    ///
    /// # Examples
    ///
    ///   obfix generate --input submission.json
    ///   obfix generate --input submission.json --out-dir fixtures/
    Generate(GenerateArgs),

    /// Validate a submission without writing anything.
    ///
    /// # Examples
    ///
    ///   obfix check --input submission.json
    ///   obfix check --input submission.json --format json
    Check(CheckArgs),

    /// Print the expected table schemas and enumerated field values.
    Schema,
}

/// Arguments for the `generate` command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the submission JSON document.
    #[arg(long)]
    pub input: PathBuf,

    /// Directory the fixture file is written into (created if missing).
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

/// Arguments for the `check` command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the submission JSON document.
    #[arg(long)]
    pub input: PathBuf,
}
