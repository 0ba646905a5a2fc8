//! Match service - pair eligible transactions with receipts

use tracing::debug;

use crate::config::MatchOptions;
use crate::domain::{MatchResult, Receipt, Transaction};

/// Compares every eligible transaction against every receipt
pub struct MatchService {
    options: MatchOptions,
}

impl MatchService {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    /// Whether a transaction takes part in matching at all
    pub fn is_eligible(&self, transaction: &Transaction) -> bool {
        if transaction.is_credit() && !self.options.include_credit {
            return false;
        }
        if !self.options.include_stripe && transaction.description.contains(&self.options.stripe_marker) {
            return false;
        }
        true
    }

    /// Match a single transaction against all receipts.
    ///
    /// Every receipt with the same amount is a candidate. Candidates paid on
    /// the transaction date are full matches, the rest are partial matches.
    pub fn match_one(&self, index: usize, transaction: &Transaction, receipts: &[Receipt]) -> MatchResult {
        let mut result = MatchResult::new(index);
        for (i, receipt) in receipts.iter().enumerate() {
            if receipt.amount != transaction.amount {
                continue;
            }
            if receipt.paid_date == Some(transaction.date) {
                result.full_matches.push(i);
            } else {
                result.partial_matches.push(i);
            }
        }
        result
    }

    /// Match all eligible transactions, in statement order.
    ///
    /// Receipts are not claimed: one receipt may match many transactions.
    pub fn match_all(&self, transactions: &[Transaction], receipts: &[Receipt]) -> Vec<MatchResult> {
        let results: Vec<MatchResult> = transactions
            .iter()
            .enumerate()
            .filter(|(_, tx)| self.is_eligible(tx))
            .map(|(i, tx)| self.match_one(i, tx, receipts))
            .collect();

        debug!(
            eligible = results.len(),
            excluded = transactions.len() - results.len(),
            "Matched transactions against receipts"
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::path::Path;

    use crate::domain::TransactionKind;

    fn tx(date: (i32, u32, u32), cents: i64, kind: TransactionKind, description: &str) -> Transaction {
        Transaction {
            account: "Everyday".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: description.to_string(),
            amount: Decimal::new(cents, 2),
            kind,
            balance: String::new(),
            serial: String::new(),
        }
    }

    fn receipt(name: &str) -> Receipt {
        Receipt::from_file_name(name, Path::new("/receipts"), '-').unwrap()
    }

    fn cafe() -> Transaction {
        tx((2023, 5, 1), 4250, TransactionKind::Debit, "Cafe")
    }

    #[test]
    fn test_full_match() {
        let receipts = vec![receipt("2023.05.01-Cafe-Lunch-$42.50-Paid(2023.05.01)")];
        let results = MatchService::new(MatchOptions::default()).match_all(&[cafe()], &receipts);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].full_matches, vec![0]);
        assert!(results[0].partial_matches.is_empty());
    }

    #[test]
    fn test_partial_match_on_different_paid_date() {
        let receipts = vec![receipt("2023.05.02-Cafe-Lunch-$42.50-Paid(2023.05.02)")];
        let results = MatchService::new(MatchOptions::default()).match_all(&[cafe()], &receipts);
        assert!(results[0].full_matches.is_empty());
        assert_eq!(results[0].partial_matches, vec![0]);
    }

    #[test]
    fn test_partial_match_without_paid_date() {
        // Filename date equals the transaction date, but only the paid date counts
        let receipts = vec![receipt("2023.05.01-Cafe-Lunch-$42.50-Pending")];
        let results = MatchService::new(MatchOptions::default()).match_all(&[cafe()], &receipts);
        assert_eq!(results[0].partial_matches, vec![0]);
    }

    #[test]
    fn test_amount_equality_ignores_scale() {
        let receipts = vec![receipt("2023.05.01-Cafe-Lunch-$42.5-Paid(2023.05.01)")];
        let results = MatchService::new(MatchOptions::default()).match_all(&[cafe()], &receipts);
        assert_eq!(results[0].full_matches, vec![0]);
    }

    #[test]
    fn test_different_amount_is_ignored() {
        let receipts = vec![receipt("2023.05.01-Cafe-Lunch-$42.51-Paid(2023.05.01)")];
        let results = MatchService::new(MatchOptions::default()).match_all(&[cafe()], &receipts);
        assert!(!results[0].has_matches());
    }

    #[test]
    fn test_credit_excluded_by_default() {
        let credit = tx((2023, 5, 1), 4250, TransactionKind::Credit, "Refund");
        let receipts = vec![receipt("2023.05.01-Cafe-Lunch-$42.50-Paid(2023.05.01)")];

        let service = MatchService::new(MatchOptions::default());
        assert!(service.match_all(&[credit.clone()], &receipts).is_empty());

        let service = MatchService::new(MatchOptions {
            include_credit: true,
            ..MatchOptions::default()
        });
        let results = service.match_all(&[credit], &receipts);
        assert_eq!(results[0].full_matches, vec![0]);
    }

    #[test]
    fn test_stripe_filter_is_case_sensitive() {
        let payout = tx((2023, 5, 1), 100, TransactionKind::Debit, "STRIPE PAYOUT");
        let lower = tx((2023, 5, 1), 100, TransactionKind::Debit, "stripe payout");

        let service = MatchService::new(MatchOptions::default());
        assert!(!service.is_eligible(&payout));
        assert!(service.is_eligible(&lower));

        let service = MatchService::new(MatchOptions {
            include_stripe: true,
            ..MatchOptions::default()
        });
        assert!(service.is_eligible(&payout));
    }

    #[test]
    fn test_receipt_shared_between_transactions() {
        let txs = vec![cafe(), tx((2023, 5, 9), 4250, TransactionKind::Debit, "Cafe again")];
        let receipts = vec![receipt("2023.05.01-Cafe-Lunch-$42.50-Paid(2023.05.01)")];
        let results = MatchService::new(MatchOptions::default()).match_all(&txs, &receipts);
        assert_eq!(results[0].full_matches, vec![0]);
        assert_eq!(results[1].partial_matches, vec![0]);
        assert_eq!(results[1].transaction, 1);
    }

    #[test]
    fn test_results_keep_statement_indices() {
        let txs = vec![
            tx((2023, 5, 1), 100, TransactionKind::Credit, "Refund"),
            cafe(),
        ];
        let results = MatchService::new(MatchOptions::default()).match_all(&txs, &[]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].transaction, 1);
    }

    #[test]
    fn test_matching_is_idempotent() {
        let txs = vec![cafe(), tx((2023, 5, 2), 1000, TransactionKind::Debit, "Bakery")];
        let receipts = vec![
            receipt("2023.05.01-Cafe-Lunch-$42.50-Paid(2023.05.01)"),
            receipt("2023.05.02-Cafe-Lunch-$42.50-Paid(2023.05.02)"),
            receipt("2023.05.02-Bakery-Bread-$10.00-Paid"),
        ];
        let service = MatchService::new(MatchOptions::default());
        assert_eq!(service.match_all(&txs, &receipts), service.match_all(&txs, &receipts));
    }
}
