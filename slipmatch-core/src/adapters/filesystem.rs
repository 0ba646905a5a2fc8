//! Receipt directory adapter
//!
//! Walks a folder tree of scanned receipts, following symbolic links, and
//! turns each file name into a [`Receipt`].

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ScanOptions;
use crate::domain::result::Result;
use crate::domain::Receipt;
use crate::ports::{ReceiptSource, ScanOutcome};

/// A directory tree of receipt files
pub struct ReceiptDirectory {
    root: PathBuf,
    options: ScanOptions,
}

impl ReceiptDirectory {
    pub fn new(root: impl Into<PathBuf>, options: ScanOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

}

impl ReceiptSource for ReceiptDirectory {
    fn name(&self) -> String {
        self.root.display().to_string()
    }

    fn scan_receipts(&self) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        // Sorted so reports come out in the same order on every platform
        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // A missing or unreadable root is fatal; anything below it is recorded
                Err(e) if e.depth() > 0 => {
                    warn!(path = ?e.path(), "Unreadable entry in receipt directory: {e}");
                    if let Some(name) = e.path().and_then(Path::file_name) {
                        outcome.errors.push(name.to_string_lossy().into_owned());
                    }
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if self.options.is_ignored(&file_name) {
                debug!(path = %entry.path().display(), "Skipping ignored file");
                continue;
            }

            let dir = entry.path().parent().unwrap_or(&self.root);
            match Receipt::from_file_name(&file_name, dir, self.options.delimiter) {
                Ok(receipt) => outcome.receipts.push(receipt),
                Err(e) if e.is_recoverable() => {
                    warn!(path = %entry.path().display(), "FILENAME ERROR: {e}");
                    outcome.errors.push(file_name.into_owned());
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            root = %self.root.display(),
            receipts = outcome.receipts.len(),
            errors = outcome.errors.len(),
            "Scanned receipt directory"
        );
        Ok(outcome)
    }
}
