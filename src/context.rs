//! Project-supplied context that parameterizes the rules.
//!
//! A [`ValidationContext`] is an explicit value handed to every validation
//! call. It is built from the owning [`Project`](crate::model::Project), or
//! from the copy a record carries once it has been assigned to a hole.

use serde::{Deserialize, Serialize};

use crate::model::core_size::{self, UnitSystem};
use crate::model::GeomechInterval;

pub const DEFAULT_MARGIN_RATIO: f64 = 1.2;
pub const US_MARGIN_CONSTANT: f64 = 0.8;
pub const METRIC_MARGIN_CONSTANT: f64 = 0.2;

/// Band for whole + broken + rubble against recovery.
pub const METRIC_TOLERANCE: f64 = 0.01;
pub const US_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationContext {
    pub is_metric_units: bool,
    /// Configured VL1..VL3 thresholds.
    pub var_lengths: [Option<f64>; 3],
    pub interval_margin_ratio: Option<f64>,
    pub interval_margin_constant: Option<f64>,
}

/// Zero, NaN and absent all read as "not set".
fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

impl ValidationContext {
    /// Context with nothing configured: US units, no variable lengths, default margins.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Rebuild the context from the copy stored on a record.
    ///
    /// Returns `None` if the record was never assigned to a hole. Margins are
    /// not copied onto records, so the defaults apply.
    #[must_use]
    pub fn from_record(record: &GeomechInterval) -> Option<Self> {
        if record.var_lengths.is_none() && record.is_metric_units.is_none() {
            return None;
        }
        Some(Self {
            is_metric_units: record.is_metric_units.unwrap_or(false),
            var_lengths: record.var_lengths.unwrap_or_default(),
            interval_margin_ratio: None,
            interval_margin_constant: None,
        })
    }

    #[must_use]
    pub const fn is_metric_units(&self) -> bool {
        self.is_metric_units
    }

    #[must_use]
    pub const fn unit_system(&self) -> UnitSystem {
        UnitSystem::from_metric(self.is_metric_units)
    }

    /// Configured threshold for variable length `k` (1-based).
    ///
    /// A threshold of zero is indistinguishable from an unconfigured one.
    #[must_use]
    pub fn var_length(&self, k: usize) -> Option<f64> {
        k.checked_sub(1)
            .and_then(|i| self.var_lengths.get(i).copied().flatten())
            .and_then(|v| truthy(Some(v)))
    }

    #[must_use]
    pub fn has_var_length(&self, k: usize) -> bool {
        self.var_length(k).is_some()
    }

    /// RQD cutoff for a core size code, in this context's units.
    #[must_use]
    pub fn core_size_cutoff(&self, code: Option<&str>) -> Option<f64> {
        code.and_then(|c| core_size::cutoff(c, self.unit_system()))
    }

    #[must_use]
    pub fn interval_margin_ratio(&self) -> f64 {
        truthy(self.interval_margin_ratio).unwrap_or(DEFAULT_MARGIN_RATIO)
    }

    #[must_use]
    pub fn interval_margin_constant(&self) -> f64 {
        let fallback = if self.is_metric_units {
            METRIC_MARGIN_CONSTANT
        } else {
            US_MARGIN_CONSTANT
        };
        truthy(self.interval_margin_constant).unwrap_or(fallback)
    }

    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        if self.is_metric_units {
            METRIC_TOLERANCE
        } else {
            US_TOLERANCE
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
