//! Summary mode - classify every transaction, then print bucket counts

use comfy_table::Cell;
use slipmatch_core::services::{ReportService, Summary};
use slipmatch_core::{Reconciliation, Severity};

use crate::output;

pub fn run(reconciliation: &Reconciliation) {
    let report = ReportService::new(reconciliation);
    for (result, classification) in report.classified() {
        output::emit(
            classification.severity(),
            &format!(
                "{} - {}",
                classification.label(),
                reconciliation.transaction(result)
            ),
        );
    }

    let summary = report.summary();
    println!();
    output::heading(&format!(
        "Total Debit Transactions - {}  Total Receipts - {}",
        summary.transactions, summary.receipts
    ));

    let mut table = output::create_table();
    for (label, count, severity) in summary_rows(&summary) {
        table.add_row(vec![
            Cell::new(label).fg(output::cell_color(severity)),
            Cell::new(count),
        ]);
    }
    println!("{table}");
}

/// Label, value and colour of each summary line.
///
/// NOTE: the "Multiple Match" row carries the no-match count and the
/// "Not Matching" row carries the multiple-match count.
fn summary_rows(summary: &Summary) -> [(&'static str, usize, Severity); 5] {
    [
        ("Matching", summary.matching, Severity::Success),
        ("Partial Matching", summary.partial, Severity::Info),
        ("Multiple Match", summary.not_matching, Severity::Warning),
        ("Not Matching", summary.multiple, Severity::Failure),
        ("Receipt Read Errors", summary.read_errors, Severity::Failure),
    ]
}
