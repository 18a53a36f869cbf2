use serde::{Deserialize, Serialize};

use crate::{GeomechGuardError, Result};

use super::value::{lenient_number, lenient_text};

/// A drill hole. Owns an ordered collection of geomech intervals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillHole {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(
        rename = "projectID",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_id: Option<String>,

    #[serde(default)]
    pub mine_area: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub collar_x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub collar_y: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub collar_z: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub collar_bearing: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub collar_inclination: Option<f64>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl DrillHole {
    #[must_use]
    pub fn new(mine_area: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mine_area: mine_area.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// # Errors
    /// Returns `Presence` naming the first blank required field.
    pub fn validate_presence(&self) -> Result<()> {
        if self.mine_area.trim().is_empty() {
            return Err(GeomechGuardError::Presence {
                entity: "Drill hole",
                field: "mineArea",
            });
        }
        if self.name.trim().is_empty() {
            return Err(GeomechGuardError::Presence {
                entity: "Drill hole",
                field: "name",
            });
        }
        Ok(())
    }
}
