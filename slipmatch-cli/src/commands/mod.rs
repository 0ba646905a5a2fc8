//! Report modes
//!
//! Exactly one mode is rendered per run. When several listing flags are given
//! the first one in [`Mode::from_cli`] order wins.

pub mod errors;
pub mod matching;
pub mod not_matching;
pub mod summary;
pub mod unused;

use anyhow::{Context, Result};
use slipmatch_core::adapters::{CsvStatement, ReceiptDirectory};
use slipmatch_core::services::ReconcileService;
use slipmatch_core::{Config, Reconciliation};

use crate::output;
use crate::Cli;

/// Which report to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Matching,
    NotMatching,
    UnusedReceipts,
    Errors,
    Summary,
}

impl Mode {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.list_matching {
            Mode::Matching
        } else if cli.list_not_matching {
            Mode::NotMatching
        } else if cli.list_not_used_receipts {
            Mode::UnusedReceipts
        } else if cli.list_errors {
            Mode::Errors
        } else {
            Mode::Summary
        }
    }
}

/// Build the effective configuration: settings file first, then switches
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_or_default(cli.config.as_deref())
        .with_context(|| format!("Failed to load settings from {:?}", cli.config))?;
    config.matching.include_credit |= cli.include_credit;
    config.matching.include_stripe |= cli.include_stripe;
    Ok(config)
}

pub fn run(cli: &Cli) -> Result<()> {
    // Missing inputs are only reported here; the read below produces the real error
    if !cli.transactions.is_file() {
        output::warning(&format!("{} doesn't exist.", cli.transactions.display()));
    }
    if !cli.receipts.is_dir() {
        output::warning(&format!(
            "{} doesn't exist or isn't a directory.",
            cli.receipts.display()
        ));
    }

    let config = load_config(cli)?;
    let statement = CsvStatement::new(&cli.transactions);
    let receipts = ReceiptDirectory::new(&cli.receipts, config.scan.clone());

    let reconciliation = ReconcileService::new(config.matching)
        .reconcile(&statement, &receipts)
        .with_context(|| {
            format!(
                "Failed to reconcile {} against {}",
                cli.transactions.display(),
                cli.receipts.display()
            )
        })?;

    render(Mode::from_cli(cli), &reconciliation);
    Ok(())
}

fn render(mode: Mode, reconciliation: &Reconciliation) {
    for name in &reconciliation.scan_errors {
        output::failure(&format!("FILENAME ERROR: {name}"));
    }
    println!();

    match mode {
        Mode::Matching => matching::run(reconciliation),
        Mode::NotMatching => not_matching::run(reconciliation),
        Mode::UnusedReceipts => unused::run(reconciliation),
        Mode::Errors => errors::run(reconciliation),
        Mode::Summary => summary::run(reconciliation),
    }
}
