//! Errors mode - receipt file names the scanner rejected

use slipmatch_core::Reconciliation;

use crate::output;

pub fn run(reconciliation: &Reconciliation) {
    for name in &reconciliation.scan_errors {
        output::failure(name);
    }
}
