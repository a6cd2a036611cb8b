//! CLI Adapter.

mod generate;
mod interactive;
mod listing;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "LIKHIT_LOG";

#[derive(Parser)]
#[command(name = "likhit")]
#[command(version)]
#[command(
    about = "Draft letters from structured details with a generative-text service",
    long_about = None
)]
struct Cli {
    /// Path to a likhit.toml config file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available letter types
    #[clap(visible_alias = "t")]
    Types {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the form fields of a letter type
    #[clap(visible_alias = "f")]
    Fields {
        /// Letter type (e.g. job, college, application, report)
        letter_type: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Generate a letter from field values
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Fill in a letter form interactively (default)
    #[clap(visible_alias = "i")]
    Interactive {
        /// Use the offline mock generator
        #[arg(long)]
        mock: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::Types { json }) => listing::run_types(json),
        Some(Commands::Fields { letter_type, json }) => listing::run_fields(&letter_type, json),
        Some(Commands::Generate(args)) => generate::run_generate(args, config),
        Some(Commands::Interactive { mock }) => interactive::run_interactive(config, mock),
        None => interactive::run_interactive(config, false),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::ParseError {
        what: "JSON output".to_string(),
        details: err.to_string(),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
