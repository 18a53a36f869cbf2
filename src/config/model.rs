use serde::{Deserialize, Serialize};

use crate::output::{ColorMode, OutputFormat};
use crate::rules::ContextPolicy;
use crate::transfer::ExportFormat;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. Missing means the current one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// How records are validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationConfig {
    /// What to do with a record that has no project context.
    #[serde(default)]
    pub context_policy: ContextPolicy,

    /// Leave blank rows out of batch validation (default: true)
    #[serde(default = "default_true")]
    pub skip_blank: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            context_policy: ContextPolicy::default(),
            skip_blank: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// Format used when `export` is run without `--format`.
    #[serde(default = "default_export_format")]
    pub format: ExportFormat,

    /// Append `-YYYY-MM-DD` to generated export file names.
    #[serde(default = "default_true")]
    pub date_suffix: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_export_format(),
            date_suffix: true,
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_export_format() -> ExportFormat {
    ExportFormat::Csv
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
