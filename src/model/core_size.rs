use serde::{Deserialize, Serialize};

/// Measurement system a project logs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Feet and inches.
    #[default]
    Us,
    /// Meters and millimeters.
    Metric,
}

impl UnitSystem {
    #[must_use]
    pub const fn from_metric(is_metric: bool) -> Self {
        if is_metric { Self::Metric } else { Self::Us }
    }

    #[must_use]
    pub const fn is_metric(self) -> bool {
        matches!(self, Self::Metric)
    }

    #[must_use]
    pub const fn diameter_unit(self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Us => "in",
        }
    }

    #[must_use]
    pub const fn length_unit(self) -> &'static str {
        match self {
            Self::Metric => "m",
            Self::Us => "ft",
        }
    }
}

/// A standard wireline core size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreSize {
    pub code: &'static str,
    /// Core diameter in mm (metric) or inches (US).
    pub diameter: f64,
    /// Shortest piece counted toward RQD, in m (metric) or ft (US).
    pub rqd_cutoff: f64,
}

const fn size(code: &'static str, diameter: f64, rqd_cutoff: f64) -> CoreSize {
    CoreSize {
        code,
        diameter,
        rqd_cutoff,
    }
}

const METRIC_SIZES: [CoreSize; 8] = [
    size("PQ", 85.0, 0.17),
    size("PQ-3", 83.0, 0.17),
    size("HQ", 63.5, 0.13),
    size("HQ-3", 61.1, 0.12),
    size("NQ", 47.6, 0.10),
    size("NQ-3", 45.0, 0.09),
    size("BQ", 36.4, 0.07),
    size("BQ-3", 33.5, 0.07),
];

const US_SIZES: [CoreSize; 8] = [
    size("PQ", 3.345, 0.6),
    size("PQ-3", 3.270, 0.6),
    size("HQ", 2.500, 0.4),
    size("HQ-3", 2.406, 0.4),
    size("NQ", 1.875, 0.3),
    size("NQ-3", 1.775, 0.3),
    size("BQ", 1.433, 0.2),
    size("BQ-3", 1.320, 0.2),
];

#[must_use]
pub const fn table(units: UnitSystem) -> &'static [CoreSize] {
    match units {
        UnitSystem::Metric => &METRIC_SIZES,
        UnitSystem::Us => &US_SIZES,
    }
}

/// Exact, case-sensitive lookup by code.
#[must_use]
pub fn lookup(code: &str, units: UnitSystem) -> Option<&'static CoreSize> {
    table(units).iter().find(|s| s.code == code)
}

#[must_use]
pub fn cutoff(code: &str, units: UnitSystem) -> Option<f64> {
    lookup(code, units).map(|s| s.rqd_cutoff)
}
