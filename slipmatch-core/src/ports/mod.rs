//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external inputs. The services depend
//! only on these traits, not on concrete implementations.

mod sources;

pub use sources::{ReceiptSource, ScanOutcome, TransactionSource};
