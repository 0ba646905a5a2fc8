//! Configuration management
//!
//! Defaults reproduce the behaviour of the bare command line. An optional JSON
//! settings file can change them:
//! ```json
//! {
//!   "matching": { "includeCredit": false, "includeStripe": false, "stripeMarker": "STRIPE" },
//!   "scan": { "delimiter": "-", "ignoredFiles": [".DS_Store", "Icon\r"] }
//! }
//! ```
//! Command-line switches are applied on top of whatever the file says.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

/// Description marker for card-processor payouts that are skipped by default
pub const DEFAULT_STRIPE_MARKER: &str = "STRIPE";

/// Finder metadata and folder-icon files that live next to receipts on macOS
pub const DEFAULT_IGNORED_FILES: [&str; 2] = [".DS_Store", "Icon\r"];

/// Slipmatch configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub matching: MatchOptions,
    #[serde(default)]
    pub scan: ScanOptions,
}

impl Config {
    /// Load config from a JSON settings file. Missing keys take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load config from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Which transactions take part in matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    #[serde(default)]
    pub include_credit: bool,
    #[serde(default)]
    pub include_stripe: bool,
    /// Case-sensitive substring identifying Stripe transactions
    #[serde(default = "default_stripe_marker")]
    pub stripe_marker: String,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            include_credit: false,
            include_stripe: false,
            stripe_marker: default_stripe_marker(),
        }
    }
}

/// How receipt file names are discovered and split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOptions {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// File names skipped without being reported
    #[serde(default = "default_ignored_files")]
    pub ignored_files: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            ignored_files: default_ignored_files(),
        }
    }
}

impl ScanOptions {
    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.ignored_files.iter().any(|f| f == file_name)
    }
}

fn default_stripe_marker() -> String {
    DEFAULT_STRIPE_MARKER.to_string()
}

fn default_delimiter() -> char {
    '-'
}

fn default_ignored_files() -> Vec<String> {
    DEFAULT_IGNORED_FILES.iter().map(|f| f.to_string()).collect()
}
