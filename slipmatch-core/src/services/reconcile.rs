//! Reconcile service - load inputs and run the matcher

use tracing::info;

use crate::config::MatchOptions;
use crate::domain::result::Result;
use crate::domain::Reconciliation;
use crate::ports::{ReceiptSource, TransactionSource};
use crate::services::MatchService;

/// Runs one reconciliation from a statement source and a receipt source
pub struct ReconcileService {
    match_service: MatchService,
}

impl ReconcileService {
    pub fn new(options: MatchOptions) -> Self {
        Self {
            match_service: MatchService::new(options),
        }
    }

    /// Load everything, then match.
    ///
    /// Both sources are read fully before any matching happens, so a bad row
    /// or file name anywhere aborts the run before a report exists.
    pub fn reconcile(
        &self,
        transactions: &dyn TransactionSource,
        receipts: &dyn ReceiptSource,
    ) -> Result<Reconciliation> {
        let loaded = transactions.load_transactions()?;
        let scan = receipts.scan_receipts()?;

        let results = self.match_service.match_all(&loaded, &scan.receipts);
        info!(
            transactions = %transactions.name(),
            receipts = %receipts.name(),
            eligible = results.len(),
            "Reconciliation complete"
        );

        Ok(Reconciliation {
            transactions: loaded,
            receipts: scan.receipts,
            scan_errors: scan.errors,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::Error;
    use crate::domain::{Receipt, Transaction};
    use crate::ports::ScanOutcome;
    use std::path::Path;

    struct MemoryStatement(Vec<[&'static str; 7]>);

    impl TransactionSource for MemoryStatement {
        fn name(&self) -> String {
            "memory".to_string()
        }

        fn load_transactions(&self) -> Result<Vec<Transaction>> {
            self.0.iter().map(|row| Transaction::from_fields(*row)).collect()
        }
    }

    struct MemoryReceipts(Vec<&'static str>);

    impl ReceiptSource for MemoryReceipts {
        fn name(&self) -> String {
            "memory".to_string()
        }

        fn scan_receipts(&self) -> Result<ScanOutcome> {
            let mut outcome = ScanOutcome::default();
            for name in &self.0 {
                match Receipt::from_file_name(name, Path::new("/r"), '-') {
                    Ok(r) => outcome.receipts.push(r),
                    Err(e) if e.is_recoverable() => outcome.errors.push(name.to_string()),
                    Err(e) => return Err(e),
                }
            }
            Ok(outcome)
        }
    }

    #[test]
    fn test_reconcile_end_to_end() {
        let statement = MemoryStatement(vec![
            ["Everyday", "01/05/2023", "Cafe", "42.50", "", "957.50", "1"],
            ["Everyday", "02/05/2023", "Salary", "", "1500", "2457.50", "2"],
            ["Everyday", "03/05/2023", "STRIPE FEES", "1.00", "", "2456.50", "3"],
        ]);
        let receipts = MemoryReceipts(vec![
            "2023.05.01-Cafe-Lunch-$42.50-Paid(2023.05.01)",
            "2023.05.01-Cafe",
        ]);

        let rec = ReconcileService::new(MatchOptions::default())
            .reconcile(&statement, &receipts)
            .unwrap();

        assert_eq!(rec.transactions.len(), 3);
        assert_eq!(rec.results.len(), 1);
        assert_eq!(rec.transaction(&rec.results[0]).description, "Cafe");
        assert_eq!(rec.full_matches(&rec.results[0]).count(), 1);
        assert_eq!(rec.scan_errors, vec!["2023.05.01-Cafe".to_string()]);
    }

    #[test]
    fn test_bad_transaction_aborts_before_matching() {
        let statement = MemoryStatement(vec![["Everyday", "01/05/2023", "Cafe", "", "", "0", "1"]]);
        let receipts = MemoryReceipts(vec![]);

        let err = ReconcileService::new(MatchOptions::default())
            .reconcile(&statement, &receipts)
            .unwrap_err();
        assert!(matches!(err, Error::MissingAmount(_)));
    }
}
