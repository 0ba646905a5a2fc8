//! Match results and their classification

/// Receipts found for one eligible transaction.
///
/// Transactions and receipts are referenced by their index in load order, so
/// two identical statement lines or two identically named receipts in
/// different folders stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub transaction: usize,
    /// Amount and paid date both agree
    pub full_matches: Vec<usize>,
    /// Amount agrees, paid date differs or is missing
    pub partial_matches: Vec<usize>,
}

impl MatchResult {
    pub fn new(transaction: usize) -> Self {
        Self {
            transaction,
            full_matches: Vec::new(),
            partial_matches: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.full_matches.len() + self.partial_matches.len()
    }

    pub fn has_matches(&self) -> bool {
        self.total() > 0
    }

    /// Whether the receipt at `receipt` is referenced by either list
    pub fn uses(&self, receipt: usize) -> bool {
        self.full_matches.contains(&receipt) || self.partial_matches.contains(&receipt)
    }

    /// Sort a result into exactly one reporting bucket.
    ///
    /// A single full match among several candidates still counts as a match.
    /// Any other result with more than one candidate is a multiple match, even
    /// when none of the candidates is a full match.
    pub fn classify(&self) -> Classification {
        match (self.full_matches.len(), self.total()) {
            (_, 0) => Classification::NoMatch,
            (1, _) => Classification::Match,
            (_, total) if total > 1 => Classification::MultipleMatch,
            _ => Classification::PartialMatch,
        }
    }
}

/// Reporting bucket for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Match,
    MultipleMatch,
    PartialMatch,
    NoMatch,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Match => "Match",
            Classification::MultipleMatch => "Multiple Match",
            Classification::PartialMatch => "Partial Match",
            Classification::NoMatch => "No Match",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Classification::Match => Severity::Success,
            Classification::MultipleMatch => Severity::Warning,
            Classification::PartialMatch => Severity::Info,
            Classification::NoMatch => Severity::Failure,
        }
    }
}

/// Semantic weight of a report line. Presentation is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Failure,
}
