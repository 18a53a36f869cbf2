use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::context::{
    DEFAULT_MARGIN_RATIO, METRIC_MARGIN_CONSTANT, US_MARGIN_CONSTANT, ValidationContext,
};
use crate::{GeomechGuardError, Result};

use super::value::{lenient_number, lenient_text};

static VAR_LEN_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^varlen(\d)$").expect("Invalid regex"));

/// A mining project. Owns the configuration that parameterizes validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub mine_property_name: String,

    #[serde(default)]
    pub is_metric_units: bool,

    /// Variable-length thresholds. A zero or absent value disables the group.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub var_len1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub var_len2: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub var_len3: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub interval_margin_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub interval_margin_constant: Option<f64>,

    /// Field names included in CSV exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gm_list_template: Option<Vec<String>>,
}

const fn margin_defaults(is_metric: bool) -> (f64, f64) {
    if is_metric {
        (DEFAULT_MARGIN_RATIO, METRIC_MARGIN_CONSTANT)
    } else {
        (DEFAULT_MARGIN_RATIO, US_MARGIN_CONSTANT)
    }
}

impl Project {
    /// A new project with the margin defaults of its unit system.
    #[must_use]
    pub fn new(mine_property_name: impl Into<String>, is_metric_units: bool) -> Self {
        let (ratio, constant) = margin_defaults(is_metric_units);
        Self {
            mine_property_name: mine_property_name.into(),
            is_metric_units,
            interval_margin_ratio: Some(ratio),
            interval_margin_constant: Some(constant),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_var_lengths(mut self, vl1: Option<f64>, vl2: Option<f64>, vl3: Option<f64>) -> Self {
        self.var_len1 = vl1;
        self.var_len2 = vl2;
        self.var_len3 = vl3;
        self
    }

    #[must_use]
    pub const fn var_lengths(&self) -> [Option<f64>; 3] {
        [self.var_len1, self.var_len2, self.var_len3]
    }

    /// Switch unit systems.
    ///
    /// The margin pair follows the switch only while it still holds the old
    /// system's defaults; custom margins are left alone.
    pub fn set_metric_units(&mut self, is_metric: bool) {
        let (old_ratio, old_constant) = margin_defaults(self.is_metric_units);
        let is_old_default = self.interval_margin_ratio == Some(old_ratio)
            && self.interval_margin_constant == Some(old_constant);
        if is_old_default {
            let (ratio, constant) = margin_defaults(is_metric);
            self.interval_margin_ratio = Some(ratio);
            self.interval_margin_constant = Some(constant);
        }
        self.is_metric_units = is_metric;
    }

    /// # Errors
    /// Returns `Presence` if the mine property name is blank.
    pub fn validate_presence(&self) -> Result<()> {
        if self.mine_property_name.trim().is_empty() {
            return Err(GeomechGuardError::Presence {
                entity: "Project",
                field: "minePropertyName",
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn context(&self) -> ValidationContext {
        ValidationContext {
            is_metric_units: self.is_metric_units,
            var_lengths: self.var_lengths(),
            interval_margin_ratio: self.interval_margin_ratio,
            interval_margin_constant: self.interval_margin_constant,
        }
    }

    /// Export header for a field: `varLenN` columns carry the configured length.
    #[must_use]
    pub fn column_header(&self, name: &str) -> String {
        let Some(caps) = VAR_LEN_FIELD.captures(name) else {
            return name.to_string();
        };
        let value = match &caps[1] {
            "1" => self.var_len1,
            "2" => self.var_len2,
            "3" => self.var_len3,
            _ => None,
        };
        format!(
            "{name}_{}",
            value.map(|v| v.to_string()).unwrap_or_default()
        )
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
