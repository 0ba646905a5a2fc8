//! Report service - group match results for display

use crate::domain::{Classification, MatchResult, Receipt, Reconciliation};

/// Read-only views over a finished reconciliation
pub struct ReportService<'a> {
    reconciliation: &'a Reconciliation,
}

impl<'a> ReportService<'a> {
    pub fn new(reconciliation: &'a Reconciliation) -> Self {
        Self { reconciliation }
    }

    /// Results with at least one full or partial match
    pub fn matching(&self) -> impl Iterator<Item = &'a MatchResult> + 'a {
        let reconciliation: &'a Reconciliation = self.reconciliation;
        reconciliation.results.iter().filter(|r| r.has_matches())
    }

    /// Results with no candidate receipt at all
    pub fn not_matching(&self) -> impl Iterator<Item = &'a MatchResult> + 'a {
        let reconciliation: &'a Reconciliation = self.reconciliation;
        reconciliation.results.iter().filter(|r| !r.has_matches())
    }

    /// Receipts that no eligible transaction matched, fully or partially
    pub fn unused_receipts(&self) -> Vec<&'a Receipt> {
        let reconciliation: &'a Reconciliation = self.reconciliation;
        let results = &reconciliation.results;
        reconciliation
            .receipts
            .iter()
            .enumerate()
            .filter(|(i, _)| !results.iter().any(|r| r.uses(*i)))
            .map(|(_, receipt)| receipt)
            .collect()
    }

    /// Every result with its bucket, in statement order
    pub fn classified(&self) -> impl Iterator<Item = (&'a MatchResult, Classification)> + 'a {
        let reconciliation: &'a Reconciliation = self.reconciliation;
        reconciliation.results.iter().map(|r| (r, r.classify()))
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            transactions: self.reconciliation.results.len(),
            receipts: self.reconciliation.receipts.len(),
            read_errors: self.reconciliation.scan_errors.len(),
            ..Summary::default()
        };
        for (_, classification) in self.classified() {
            match classification {
                Classification::Match => summary.matching += 1,
                Classification::PartialMatch => summary.partial += 1,
                Classification::MultipleMatch => summary.multiple += 1,
                Classification::NoMatch => summary.not_matching += 1,
            }
        }
        summary
    }
}

/// Bucket counts for the default report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Eligible transactions
    pub transactions: usize,
    pub receipts: usize,
    pub matching: usize,
    pub partial: usize,
    pub multiple: usize,
    pub not_matching: usize,
    /// Receipt file names rejected by the scanner
    pub read_errors: usize,
}
