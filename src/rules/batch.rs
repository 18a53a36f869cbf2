use std::collections::BTreeSet;

use super::result::{RuleFailure, RuleId, Severity};

/// Which record a batch entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    /// Zero-based position in the working set, blank rows included.
    pub index: usize,
    pub id: Option<String>,
}

impl RecordRef {
    /// One-based row number as shown to the user.
    #[must_use]
    pub const fn row_number(&self) -> usize {
        self.index + 1
    }
}

/// One failing rule of one record in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub source: RecordRef,
    pub rule: RuleId,
    pub severity: Severity,
    pub message: String,
}

impl BatchEntry {
    #[must_use]
    pub fn new(source: RecordRef, failure: RuleFailure) -> Self {
        Self {
            source,
            rule: failure.rule,
            severity: failure.severity,
            message: failure.message,
        }
    }

    #[must_use]
    pub const fn error_code(&self) -> Option<u8> {
        self.rule.error_code()
    }
}

/// Outcome of validating a working set. Entries are in record order, then rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub records_checked: usize,
    pub records_skipped: usize,
}

impl BatchReport {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        !self.entries.is_empty()
    }

    #[must_use]
    pub const fn row_number(entry: &BatchEntry) -> usize {
        entry.source.row_number()
    }

    /// Distinct failing rows, ascending.
    #[must_use]
    pub fn failing_rows(&self) -> Vec<usize> {
        self.entries
            .iter()
            .map(|e| e.source.row_number())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn blocking_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.severity == Severity::Blocking)
            .count()
    }
}
