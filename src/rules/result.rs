use std::fmt;

use serde::Serialize;

/// Identifies a rule in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    /// "From" must be less than "To". Carries no error code.
    IntervalOrder,
    /// One of the numbered consistency rules, 1..=53.
    Code(u8),
}

impl RuleId {
    #[must_use]
    pub const fn error_code(self) -> Option<u8> {
        match self {
            Self::IntervalOrder => None,
            Self::Code(code) => Some(code),
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntervalOrder => f.write_str("-"),
            Self::Code(code) => write!(f, "#{code}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Structural problem; the interval itself is malformed.
    Blocking,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocking => "blocking",
            Self::Error => "error",
        }
    }
}

/// One failing rule for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    pub rule: RuleId,
    pub severity: Severity,
    pub message: String,
}

impl RuleFailure {
    #[must_use]
    pub const fn error_code(&self) -> Option<u8> {
        self.rule.error_code()
    }
}
