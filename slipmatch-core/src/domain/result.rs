//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Every variant except `FieldCount` is fatal to a reconciliation run. The
/// scanner catches `FieldCount` and records the file name instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Incorrect date format ([D]D/MM/YYYY) in transaction {description}: {value}")]
    TransactionDate { description: String, value: String },

    #[error("Incorrect date format (YYYY.MM.DD) in receipt {description}: {value}")]
    ReceiptDate { description: String, value: String },

    #[error("Invalid amount '{value}' in {context}")]
    Amount { context: String, value: String },

    #[error("Transaction {0} has neither a debit nor a credit amount")]
    MissingAmount(String),

    #[error("Malformed transaction row {line}: expected {expected} fields, found {found}")]
    Row {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Receipt file name {file_name} has {found} fields, expected 5 or 6")]
    FieldCount { file_name: String, found: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an amount error
    pub fn amount(context: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Amount {
            context: context.into(),
            value: value.into(),
        }
    }

    /// Whether the scanner may record this error and keep walking
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FieldCount { .. })
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
