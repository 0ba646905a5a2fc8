//! CSV statement adapter
//!
//! Reads a bank export with a single header row followed by rows of
//! `account, date, narrative, debit, credit, balance, serial`.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::result::{Error, Result};
use crate::domain::{Transaction, TRANSACTION_FIELD_COUNT};
use crate::ports::TransactionSource;

/// A bank statement exported as CSV
pub struct CsvStatement {
    path: PathBuf,
}

impl CsvStatement {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionSource for CsvStatement {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        let file = File::open(&self.path)?;
        let transactions = read_transactions(file)?;
        info!(
            path = %self.path.display(),
            count = transactions.len(),
            "Loaded statement transactions"
        );
        Ok(transactions)
    }
}

/// Parse statement rows from any reader. The first row is always skipped.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let fields: Vec<&str> = record.iter().collect();
        let fields = <[&str; TRANSACTION_FIELD_COUNT]>::try_from(fields.as_slice()).map_err(|_| {
            Error::Row {
                line,
                expected: TRANSACTION_FIELD_COUNT,
                found: fields.len(),
            }
        })?;

        let transaction = Transaction::from_fields(fields)?;
        debug!(line, %transaction, "Parsed statement row");
        transactions.push(transaction);
    }
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use rust_decimal::Decimal;

    const HEADER: &str = "Account,Date,Narrative,Debit,Credit,Balance,Serial\n";

    #[test]
    fn test_reads_rows_after_header() {
        let data = format!(
            "{HEADER}Everyday,01/05/2023,Cafe,42.50,,957.50,1\n\
             Everyday,02/05/2023,Salary,,1500.00,2457.50,2\n"
        );
        let txs = read_transactions(data.as_bytes()).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].kind, TransactionKind::Debit);
        assert_eq!(txs[0].amount, Decimal::new(4250, 2));
        assert_eq!(txs[1].kind, TransactionKind::Credit);
        assert_eq!(txs[1].serial, "2");
    }

    #[test]
    fn test_quoted_narrative_with_comma() {
        let data = format!("{HEADER}Everyday,01/05/2023,\"Cafe, Main St\",42.50,,957.50,1\n");
        let txs = read_transactions(data.as_bytes()).unwrap();
        assert_eq!(txs[0].description, "Cafe, Main St");
    }

    #[test]
    fn test_header_only() {
        assert!(read_transactions(HEADER.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_column_count() {
        let data = format!("{HEADER}Everyday,01/05/2023,Cafe,42.50\n");
        let err = read_transactions(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Row {
                line: 2,
                expected: 7,
                found: 4
            }
        ));
    }

    #[test]
    fn test_bad_date_stops_the_load() {
        let data = format!(
            "{HEADER}Everyday,01/05/2023,Cafe,42.50,,957.50,1\n\
             Everyday,2023-05-02,Bakery,5.00,,952.50,2\n"
        );
        let err = read_transactions(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::TransactionDate { ref description, .. } if description == "Bakery"));
    }

    #[test]
    fn test_missing_file() {
        let source = CsvStatement::new("/definitely/not/here.csv");
        assert!(matches!(source.load_transactions(), Err(Error::Io(_))));
    }
}
