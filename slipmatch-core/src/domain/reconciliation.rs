//! Outcome of one reconciliation run

use super::{MatchResult, Receipt, Transaction};

/// Everything loaded and computed for a single run, held in memory only
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    pub transactions: Vec<Transaction>,
    pub receipts: Vec<Receipt>,
    /// File names rejected by the scanner
    pub scan_errors: Vec<String>,
    /// One entry per eligible transaction, in statement order
    pub results: Vec<MatchResult>,
}

impl Reconciliation {
    pub fn transaction(&self, result: &MatchResult) -> &Transaction {
        &self.transactions[result.transaction]
    }

    pub fn full_matches<'a>(&'a self, result: &'a MatchResult) -> impl Iterator<Item = &'a Receipt> + 'a {
        result.full_matches.iter().map(|&i| &self.receipts[i])
    }

    pub fn partial_matches<'a>(&'a self, result: &'a MatchResult) -> impl Iterator<Item = &'a Receipt> + 'a {
        result.partial_matches.iter().map(|&i| &self.receipts[i])
    }
}
