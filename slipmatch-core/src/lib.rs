//! Slipmatch Core - reconcile bank transactions against receipt files
//!
//! This crate implements the reconciliation logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Transaction, Receipt, MatchResult, etc.)
//! - **ports**: Trait definitions for inputs (TransactionSource, ReceiptSource)
//! - **services**: Matching and report aggregation
//! - **adapters**: Concrete implementations (CSV statements, receipt folders)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types at crate root
pub use config::{Config, MatchOptions, ScanOptions};
pub use domain::result::{Error, Result};
pub use domain::{
    Classification, MatchResult, Receipt, Reconciliation, Severity, Transaction, TransactionKind,
};
