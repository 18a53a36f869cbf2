use serde::{Deserialize, Serialize};

use crate::error::ImportError;
use crate::model::{DrillHole, GeomechInterval, Project};
use crate::Result;

/// A drill hole exported together with its project and geomech records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolePack {
    #[serde(flatten)]
    pub hole: DrillHole,
    pub project: Project,
    #[serde(rename = "geomechData", default)]
    pub geomech_data: Vec<GeomechInterval>,
}

impl HolePack {
    /// Parse an exported pack.
    ///
    /// # Errors
    /// Returns `ImportError::InvalidFile` if `json` is not a hole pack.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| ImportError::InvalidFile { source }.into())
    }

    /// Pretty JSON with four-space indentation.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
