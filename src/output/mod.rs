mod error_output;
mod json;
mod text;

pub use error_output::{ErrorOutput, print_error_full, print_warning};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::BatchReport;

/// The validation report of one drill hole, labeled by where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedHole {
    /// Hole name, or the pack file path when checking packs.
    pub source: String,
    pub report: BatchReport,
}

impl CheckedHole {
    #[must_use]
    pub fn new(source: impl Into<String>, report: BatchReport) -> Self {
        Self {
            source: source.into(),
            report,
        }
    }
}

/// Trait for formatting validation reports into various output formats.
pub trait OutputFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, holes: &[CheckedHole]) -> Result<String>;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// Build the formatter for a format.
#[must_use]
pub fn formatter_for(format: OutputFormat, color: ColorMode, verbose: u8) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(color, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

fn no_color_set() -> bool {
    // Presence of the variable disables color (https://no-color.org)
    std::env::var_os("NO_COLOR").is_some()
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
