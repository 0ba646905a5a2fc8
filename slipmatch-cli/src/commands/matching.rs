//! Matching mode - every transaction with its candidate receipts

use slipmatch_core::services::ReportService;
use slipmatch_core::Reconciliation;

use crate::output;

pub fn run(reconciliation: &Reconciliation) {
    for result in ReportService::new(reconciliation).matching() {
        let transaction = reconciliation.transaction(result);
        output::heading(&format!("Transaction - {transaction}"));

        if result.total() > 1 {
            output::warning(&format!(
                "WARNING - Multiple matching receipts with amount {} found - ",
                transaction.amount
            ));
        }

        if !result.full_matches.is_empty() {
            println!("Matches: ");
            for receipt in reconciliation.full_matches(result) {
                output::success(&receipt.to_string());
            }
        }
        if !result.partial_matches.is_empty() {
            println!("Partial Matches (only amount, not paidDate): ");
            for receipt in reconciliation.partial_matches(result) {
                output::info(&receipt.to_string());
            }
        }
        println!();
    }
}
