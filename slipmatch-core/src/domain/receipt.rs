//! Receipt domain model
//!
//! Receipts are never read from their contents. Everything is encoded in the
//! file name:
//!
//! ```text
//! 2023.05.01-Cafe-Lunch-$42.50-Paid(2023.05.01).pdf
//! ^date      ^name ^desc ^amount ^status
//! ```
//!
//! An optional sixth field is accepted and ignored.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use super::result::{Error, Result};
use super::transaction::is_four_digit_year;

/// Date format used in receipt file names and paid-date markers
pub const RECEIPT_DATE_FORMAT: &str = "%Y.%m.%d";

/// Accepted field counts for a receipt file name
pub const RECEIPT_FIELD_COUNTS: [usize; 2] = [5, 6];

fn paid_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\(\d{4}\.\d{2}\.\d{2}\)").expect("valid paid-date pattern"))
}

/// A scanned receipt described by its file name
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Date in the file name (usually the purchase date)
    pub date: NaiveDate,
    pub payer_or_payee: String,
    pub description: String,
    /// Magnitude as written in the file name
    pub amount: Decimal,
    /// Free-form status text, may embed a `(YYYY.MM.DD)` paid date
    pub status: String,
    /// Date the receipt was paid, taken from the status text
    pub paid_date: Option<NaiveDate>,
    /// Directory the file was found in
    pub source_dir: PathBuf,
    pub file_name: String,
}

impl Receipt {
    /// Split a file name on `delimiter` and build a receipt from the parts.
    pub fn from_file_name(file_name: &str, source_dir: &Path, delimiter: char) -> Result<Self> {
        let fields: Vec<&str> = file_name.split(delimiter).collect();
        Self::from_fields(&fields, source_dir, file_name)
    }

    /// Build a receipt from already split file name fields.
    pub fn from_fields(fields: &[&str], source_dir: &Path, file_name: &str) -> Result<Self> {
        if !RECEIPT_FIELD_COUNTS.contains(&fields.len()) {
            return Err(Error::FieldCount {
                file_name: file_name.to_string(),
                found: fields.len(),
            });
        }
        let (date, name, description, amount, status) =
            (fields[0], fields[1], fields[2], fields[3], fields[4]);

        let date = parse_receipt_date(description, date)?;

        let amount_text = amount.trim().trim_matches('$').trim();
        let amount = Decimal::from_str(amount_text)
            .map_err(|_| Error::amount(format!("receipt {description}"), amount))?;

        let paid_date = match paid_date_pattern().find(status) {
            Some(marker) => {
                let inner = marker.as_str().trim_start_matches('(').trim_end_matches(')');
                Some(parse_receipt_date(description, inner)?)
            }
            None => None,
        };

        Ok(Self {
            date,
            payer_or_payee: name.to_string(),
            description: description.to_string(),
            amount,
            status: status.to_string(),
            paid_date,
            source_dir: source_dir.to_path_buf(),
            file_name: file_name.to_string(),
        })
    }

    /// Full path of the receipt file
    pub fn path(&self) -> PathBuf {
        self.source_dir.join(&self.file_name)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}

fn parse_receipt_date(description: &str, value: &str) -> Result<NaiveDate> {
    let error = || Error::ReceiptDate {
        description: description.to_string(),
        value: value.to_string(),
    };
    let trimmed = value.trim();
    if !trimmed.split('.').next().is_some_and(is_four_digit_year) {
        return Err(error());
    }
    NaiveDate::parse_from_str(trimmed, RECEIPT_DATE_FORMAT).map_err(|_| error())
}
