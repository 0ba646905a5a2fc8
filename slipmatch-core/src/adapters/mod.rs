//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - CSV bank exports for TransactionSource
//! - A local receipt folder tree for ReceiptSource

pub mod csv;
pub mod filesystem;

pub use self::csv::{read_transactions, CsvStatement};
pub use self::filesystem::ReceiptDirectory;
