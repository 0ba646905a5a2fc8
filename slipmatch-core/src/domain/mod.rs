//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with parsing logic - no I/O or external dependencies.

mod match_result;
mod receipt;
mod reconciliation;
mod transaction;
pub mod result;

pub use match_result::{Classification, MatchResult, Severity};
pub use receipt::{Receipt, RECEIPT_DATE_FORMAT, RECEIPT_FIELD_COUNTS};
pub use reconciliation::Reconciliation;
pub use transaction::{Transaction, TransactionKind, TRANSACTION_DATE_FORMAT, TRANSACTION_FIELD_COUNT};
