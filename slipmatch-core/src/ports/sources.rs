//! Input source ports
//!
//! Defines where statement lines and receipts come from. The reconcile
//! service only talks to these traits, so tests can feed records from memory
//! while the CLI reads a CSV export and a receipt folder.

use crate::domain::result::Result;
use crate::domain::{Receipt, Transaction};

/// Result of scanning for receipts
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub receipts: Vec<Receipt>,
    /// File names that could not be split into receipt fields
    pub errors: Vec<String>,
}

/// Supplies bank statement transactions in statement order
pub trait TransactionSource {
    /// Source name for log messages (e.g., a file path)
    fn name(&self) -> String;

    /// Load every transaction. Any malformed row fails the whole load.
    fn load_transactions(&self) -> Result<Vec<Transaction>>;
}

/// Supplies receipts
pub trait ReceiptSource {
    /// Source name for log messages (e.g., a directory path)
    fn name(&self) -> String;

    /// Collect every receipt plus the file names that were rejected.
    ///
    /// Rejected names do not stop the scan; unparseable dates and amounts do.
    fn scan_receipts(&self) -> Result<ScanOutcome>;
}
