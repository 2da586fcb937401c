//! # cadastro CLI entry point
//!
//! Parses command-line arguments, loads settings, installs logging and
//! dispatches to the subcommand handlers.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use cadastro_validator::field::Policy;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands::{CatalogArg, FormArg, MaskArg, RuleArg};
use crate::config::Settings;

/// Validate and format Brazilian registration data.
#[derive(Parser, Debug)]
#[command(name = "cadastro", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (defaults to `cadastro.toml` when present).
    #[arg(long, global = true, env = "CADASTRO_CONFIG")]
    config: Option<PathBuf>,

    /// Reference date for age checks instead of the local date.
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one value against a rule; prints `ok` or the reason.
    Validate {
        #[arg(value_enum)]
        rule: RuleArg,
        value: String,
        /// Email or password a confirmation must repeat.
        #[arg(long)]
        against: Option<String>,
    },

    /// Apply a display mask.
    Format {
        #[arg(value_enum)]
        mask: MaskArg,
        value: String,
    },

    /// Strip `<` and `>` and surrounding whitespace.
    Sanitize { value: String },

    /// Validate a JSON form payload (`-` reads stdin).
    Form {
        #[arg(value_enum)]
        form: FormArg,
        path: PathBuf,
        /// Only validate this step (1-based).
        #[arg(long)]
        step: Option<usize>,
        /// Print the errors as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the options of a select field.
    Catalog {
        #[arg(value_enum)]
        table: CatalogArg,
        /// Print the options as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(2);
        }
    };

    logging::init(&settings.log_level, cli.verbose);
    tracing::debug!(?settings, "settings loaded");

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let policy = Policy::on(today).with_minimum_age(settings.minimum_age);

    let result = match cli.command {
        Commands::Validate {
            rule,
            value,
            against,
        } => commands::run_validate(rule, &value, against.as_deref(), policy),
        Commands::Format { mask, value } => Ok(commands::run_format(mask, &value)),
        Commands::Sanitize { value } => Ok(commands::run_sanitize(&value)),
        Commands::Form {
            form,
            path,
            step,
            json,
        } => commands::run_form(form, &path, step, json, policy),
        Commands::Catalog { table, json } => commands::run_catalog(table, json),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
