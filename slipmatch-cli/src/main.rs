//! Slipmatch CLI - reconcile a bank statement against a folder of receipts

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

/// Slipmatch - find the receipt for every bank transaction
///
/// Receipts are matched by file name:
/// YYYY.MM.DD-payee-description-$amount-status, where the status may carry a
/// paid date such as "Paid(2023.05.01)". A receipt whose amount equals the
/// transaction amount is a partial match; if its paid date also equals the
/// transaction date it is a full match.
#[derive(Parser, Debug)]
#[command(name = "slipmatch", version, about, long_about)]
pub struct Cli {
    /// CSV file containing transactions to match
    #[arg(long)]
    transactions: PathBuf,

    /// Top level folder containing receipts
    #[arg(long)]
    receipts: PathBuf,

    /// List each transaction with its matching and partially matching receipts
    #[arg(long = "list_matching")]
    list_matching: bool,

    /// List transactions without any matching receipt
    #[arg(long = "list_not_matching")]
    list_not_matching: bool,

    /// List receipts that no transaction matched
    #[arg(long = "list_not_used_receipts")]
    list_not_used_receipts: bool,

    /// Match transactions whose description contains STRIPE
    #[arg(long = "include_stripe")]
    include_stripe: bool,

    /// Match credit transactions as well as debits
    #[arg(long = "include_credit")]
    include_credit: bool,

    /// List receipt file names that could not be parsed
    #[arg(long = "list_errors")]
    list_errors: bool,

    /// JSON settings file with matching and scanning defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    if atty::isnt(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    debug!("{cli:?}");
    commands::run(&cli)
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("slipmatch_core={level},slipmatch={level}")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
