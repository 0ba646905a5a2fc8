//! Unused-receipts mode

use slipmatch_core::services::ReportService;
use slipmatch_core::Reconciliation;

pub fn run(reconciliation: &Reconciliation) {
    println!("Receipts not used:");
    for receipt in ReportService::new(reconciliation).unused_receipts() {
        println!("Receipt - {receipt}");
    }
}
