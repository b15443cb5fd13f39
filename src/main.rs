//! Dateline main entry point
//!
//! This is the command-line interface for the dateline archive scraper.

use clap::Parser;
use dateline::config::{load_config_with_hash, Config};
use dateline::dates::parse_input_date;
use dateline::scrape::run_scrape;
use dateline::ConfigError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Process exit codes
const EXIT_FAILURE: i32 = 1;
const EXIT_INTERRUPTED: i32 = 2;
const EXIT_CONFIG_MISSING: i32 = 3;

/// Dateline: scrape every article an archive published on one date
#[derive(Parser, Debug)]
#[command(name = "dateline")]
#[command(version)]
#[command(about = "Scrape every article a news archive published on one date", long_about = None)]
struct Cli {
    /// Target date, e.g. 01/10/2026, 2026-01-10 or "January 10, 2026"
    #[arg(value_name = "DATE")]
    date: String,

    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    std::process::exit(run(cli).await);
}

async fn run(cli: Cli) -> i32 {
    let target = match parse_input_date(&cli.date) {
        Ok(date) => date,
        Err(e) => {
            tracing::error!("{}", e);
            return EXIT_FAILURE;
        }
    };

    let config = match load_configuration(cli.config.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };

    tracing::info!(
        "Scraping {} for records published on {}",
        config.source.base_url,
        target
    );

    // Racing against ctrl-c: losing drops the in-flight scrape future and
    // its connections before the process exits with the interrupt code.
    tokio::select! {
        result = run_scrape(config, target) => match result {
            Ok(summary) => {
                tracing::info!(
                    "Done: located {} record links, resolved {} articles, stored {} new rows",
                    summary.located,
                    summary.resolved,
                    summary.stored
                );
                0
            }
            Err(e) => {
                tracing::error!("Scrape failed: {}", e);
                EXIT_FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::error!("Interrupted by user, shutting down");
            EXIT_INTERRUPTED
        }
    }
}

/// Loads the config file when given, falling back to built-in defaults
///
/// An explicitly named file that does not exist gets its own exit code so
/// callers can tell a typo'd path from a failed scrape.
fn load_configuration(path: Option<&std::path::Path>) -> Result<Config, i32> {
    match path {
        Some(path) => match load_config_with_hash(path) {
            Ok((config, hash)) => {
                tracing::info!(
                    "Configuration loaded from {} (hash: {})",
                    path.display(),
                    hash
                );
                Ok(config)
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::error!("Config file not found: {}", path.display());
                Err(EXIT_CONFIG_MISSING)
            }
            Err(e) => {
                tracing::error!("Failed to load configuration: {}", e);
                Err(EXIT_FAILURE)
            }
        },
        None => {
            tracing::debug!("No config file given, using built-in defaults");
            Ok(Config::default())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("dateline=info,warn"),
            1 => EnvFilter::new("dateline=debug,info"),
            2 => EnvFilter::new("dateline=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
