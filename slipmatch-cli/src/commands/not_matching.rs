//! Not-matching mode - transactions with no candidate receipt

use slipmatch_core::services::ReportService;
use slipmatch_core::Reconciliation;

use crate::output;

pub fn run(reconciliation: &Reconciliation) {
    println!("No matching or partial matching receipt:");
    for result in ReportService::new(reconciliation).not_matching() {
        output::failure(&format!("Transaction - {}", reconciliation.transaction(result)));
    }
}
