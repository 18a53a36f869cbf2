use serde::{Deserialize, Serialize};

use crate::context::ValidationContext;
use crate::{GeomechGuardError, Result};

use super::value::{FieldValue, lenient_number, lenient_text};

/// Canonical field order. Export templates are sorted into this order.
pub const FIELD_NAMES: &[&str] = &[
    "id",
    "intervalFrom",
    "intervalTo",
    "recoveryLen",
    "wholePieceCount",
    "wholeCoreLen",
    "longestPieceLen",
    "varLen1",
    "varLen2",
    "rqdLen",
    "varLen3",
    "brokenZoneLen",
    "rubbleZoneLen",
    "h2len",
    "aveHardness",
    "jointSetCount",
    "jointExpression",
    "jointFilling",
    "jointWallAlteration",
    "jointRoughness",
    "jointAlteration",
    "coreSize",
    "extra1",
    "extra2",
    "extra3",
    "extra4",
    "comments",
    "sampleCount",
    "drillHoleID",
    "varLengths",
    "isMetricUnits",
];

/// Internal bookkeeping fields, never part of an export template.
pub const PRIVATE_FIELDS: &[&str] = &["drillHoleID", "varLengths", "isMetricUnits"];

/// Fields that may be filled in on a row that still counts as blank.
///
/// `id` is here because the store assigns one to every row it holds.
pub const BLANK_CHECK_IGNORED: &[&str] = &["id", "intervalFrom", "intervalTo", "coreSize"];

/// One logged core run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeomechInterval {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub interval_from: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub interval_to: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub recovery_len: Option<f64>,
    /// Number of whole core pieces.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub whole_piece_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub whole_core_len: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub longest_piece_len: Option<f64>,
    /// Length of pieces greater than VL1.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub var_len1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub var_len2: Option<f64>,
    /// Length of core pieces at least twice the core diameter ("2X core").
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub rqd_len: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub var_len3: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub broken_zone_len: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub rubble_zone_len: Option<f64>,
    /// Length with hardness <= 2.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub h2len: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub ave_hardness: Option<f64>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub joint_set_count: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub joint_expression: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub joint_filling: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub joint_wall_alteration: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub joint_roughness: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub joint_alteration: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub core_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub extra1: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub extra2: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub extra3: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub extra4: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<String>,

    #[serde(
        rename = "drillHoleID",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub drill_hole_id: Option<String>,
    /// Project variable lengths copied in when the record joins a hole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_lengths: Option<[Option<f64>; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_metric_units: Option<bool>,
}

impl GeomechInterval {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drilled length of the interval. Absent bounds read as zero.
    #[must_use]
    pub fn interval_len(&self) -> f64 {
        self.interval_to.unwrap_or(0.0) - self.interval_from.unwrap_or(0.0)
    }

    /// Look up a field value by its canonical name.
    ///
    /// # Errors
    /// Returns `UnknownField` if `name` is not one of [`FIELD_NAMES`].
    pub fn get(&self, name: &str) -> Result<FieldValue> {
        let value = match name {
            "id" => self.id.as_ref().into(),
            "intervalFrom" => self.interval_from.into(),
            "intervalTo" => self.interval_to.into(),
            "recoveryLen" => self.recovery_len.into(),
            "wholePieceCount" => self.whole_piece_count.into(),
            "wholeCoreLen" => self.whole_core_len.into(),
            "longestPieceLen" => self.longest_piece_len.into(),
            "varLen1" => self.var_len1.into(),
            "varLen2" => self.var_len2.into(),
            "rqdLen" => self.rqd_len.into(),
            "varLen3" => self.var_len3.into(),
            "brokenZoneLen" => self.broken_zone_len.into(),
            "rubbleZoneLen" => self.rubble_zone_len.into(),
            "h2len" => self.h2len.into(),
            "aveHardness" => self.ave_hardness.into(),
            "jointSetCount" => self.joint_set_count.as_ref().into(),
            "jointExpression" => self.joint_expression.as_ref().into(),
            "jointFilling" => self.joint_filling.as_ref().into(),
            "jointWallAlteration" => self.joint_wall_alteration.as_ref().into(),
            "jointRoughness" => self.joint_roughness.as_ref().into(),
            "jointAlteration" => self.joint_alteration.as_ref().into(),
            "coreSize" => self.core_size.as_ref().into(),
            "extra1" => self.extra1.as_ref().into(),
            "extra2" => self.extra2.as_ref().into(),
            "extra3" => self.extra3.as_ref().into(),
            "extra4" => self.extra4.as_ref().into(),
            "comments" => self.comments.as_ref().into(),
            "sampleCount" => self.sample_count.as_ref().into(),
            "drillHoleID" => self.drill_hole_id.as_ref().into(),
            "varLengths" => self
                .var_lengths
                .map_or(FieldValue::Empty, |v| FieldValue::Numbers(v.to_vec())),
            "isMetricUnits" => self.is_metric_units.into(),
            other => return Err(GeomechGuardError::UnknownField(other.to_string())),
        };
        Ok(value)
    }

    /// True when nothing but the interval bounds and core size has been entered.
    ///
    /// Blank rows are exempt from batch validation and are never persisted.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        FIELD_NAMES
            .iter()
            .filter(|name| !PRIVATE_FIELDS.contains(name) && !BLANK_CHECK_IGNORED.contains(name))
            .all(|name| self.get(name).is_ok_and(|v| v.is_empty()))
    }

    /// Values of the named fields, in the order given.
    ///
    /// # Errors
    /// Returns `UnknownField` for the first name that is not a record field.
    pub fn field_slice<S: AsRef<str>>(&self, fields: &[S]) -> Result<Vec<FieldValue>> {
        fields.iter().map(|f| self.get(f.as_ref())).collect()
    }

    /// Link the record to its drill hole and copy in the project context.
    pub fn assign_context(&mut self, drill_hole_id: &str, context: &ValidationContext) {
        self.drill_hole_id = Some(drill_hole_id.to_string());
        self.var_lengths = Some(context.var_lengths);
        self.is_metric_units = Some(context.is_metric_units);
    }
}

/// Keep the template's field names that exist, in canonical order.
#[must_use]
pub fn canonical_field_sort<S: AsRef<str>>(template: &[S]) -> Vec<&'static str> {
    FIELD_NAMES
        .iter()
        .copied()
        .filter(|name| template.iter().any(|t| t.as_ref() == *name))
        .collect()
}

/// Every non-private field in canonical order.
#[must_use]
pub fn public_fields() -> Vec<&'static str> {
    FIELD_NAMES
        .iter()
        .copied()
        .filter(|name| !PRIVATE_FIELDS.contains(name))
        .collect()
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;
