//! Transaction domain model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use super::result::{Error, Result};

/// Statement date format, e.g. `1/5/2023` or `01/05/2023`
pub const TRANSACTION_DATE_FORMAT: &str = "%d/%m/%Y";

/// Number of columns in a statement row:
/// account, date, narrative, debit, credit, balance, serial
pub const TRANSACTION_FIELD_COUNT: usize = 7;

/// Direction of money movement on the statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Debit,
    Credit,
}

/// A single bank statement line
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub account: String,
    pub date: NaiveDate,
    /// Statement narrative
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    /// Running balance, kept verbatim
    pub balance: String,
    pub serial: String,
}

impl Transaction {
    /// Build a transaction from the seven ordered statement columns.
    ///
    /// The debit and credit columns are checked independently: when both are
    /// populated the credit column is applied last and wins.
    pub fn from_fields(fields: [&str; TRANSACTION_FIELD_COUNT]) -> Result<Self> {
        let [account, date, narrative, debit, credit, balance, serial] = fields;

        let date = parse_transaction_date(date).ok_or_else(|| Error::TransactionDate {
            description: narrative.to_string(),
            value: date.to_string(),
        })?;

        let mut amount_kind = None;
        if !debit.is_empty() {
            amount_kind = Some((parse_amount(narrative, debit)?, TransactionKind::Debit));
        }
        if !credit.is_empty() {
            if amount_kind.is_some() {
                warn!(
                    narrative,
                    debit, credit, "Row has both debit and credit amounts, using credit"
                );
            }
            amount_kind = Some((parse_amount(narrative, credit)?, TransactionKind::Credit));
        }
        let (amount, kind) =
            amount_kind.ok_or_else(|| Error::MissingAmount(narrative.to_string()))?;

        Ok(Self {
            account: account.to_string(),
            date,
            description: narrative.to_string(),
            amount,
            kind,
            balance: balance.to_string(),
            serial: serial.to_string(),
        })
    }

    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.date.format("%Y-%m-%d 00:00:00"),
            self.amount,
            self.description
        )
    }
}

/// `%Y` alone also takes signed and five-digit years, so the year is checked first
fn parse_transaction_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let year = value.rsplit('/').next()?;
    if !is_four_digit_year(year) {
        return None;
    }
    NaiveDate::parse_from_str(value, TRANSACTION_DATE_FORMAT).ok()
}

pub(crate) fn is_four_digit_year(year: &str) -> bool {
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

fn parse_amount(narrative: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim())
        .map_err(|_| Error::amount(format!("transaction {narrative}"), value))
}
