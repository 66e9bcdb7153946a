mod error;
mod lookup;

use anyhow::{Context as _, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error, EXIT_USAGE};
use okved_config as config;

#[derive(Debug, Parser)]
#[command(
    name = "okved",
    version,
    about = "Find the OKVED entry matching the trailing digits of a phone number"
)]
struct Cli {
    /// Phone number in any common Russian notation
    phone: String,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Read the OKVED tree from a local JSON file instead of downloading it
    #[arg(long, conflicts_with = "url")]
    tree_file: Option<PathBuf>,
    /// Download the OKVED tree from this URL
    #[arg(long)]
    url: Option<String>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        phone,
        config: config_path,
        tree_file,
        url,
        json,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let options = lookup::LookupOptions {
        tree_file,
        url,
        json,
    };
    lookup::lookup(&app_config, &phone, options)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
