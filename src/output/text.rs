use std::fmt::Write;

use crate::error::Result;
use crate::rules::{BatchEntry, BatchReport, Severity};

use super::{CheckedHole, ColorMode, OutputFormatter, ansi, no_color_set};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_hole(&self, hole: &CheckedHole, output: &mut String) {
        let report = &hole.report;
        if report.is_clean() {
            let status = self.colorize("PASSED", ansi::GREEN);
            let _ = writeln!(
                output,
                "✓ {status}: {} ({} records)",
                hole.source, report.records_checked
            );
            return;
        }

        let status = self.colorize("FAILED", ansi::RED);
        let _ = writeln!(
            output,
            "✗ {status}: {} ({} of {} records failing)",
            hole.source,
            report.failing_rows().len(),
            report.records_checked
        );
        for entry in &report.entries {
            self.format_entry(entry, output);
        }
    }

    fn format_entry(&self, entry: &BatchEntry, output: &mut String) {
        let code = self.colorize(&format!("{:>3}", entry.rule.to_string()), ansi::CYAN);
        let _ = write!(
            output,
            "  row {:<4} {code}  {}",
            BatchReport::row_number(entry),
            entry.message
        );
        if entry.severity == Severity::Blocking {
            let _ = write!(output, " {}", self.colorize("[blocking]", ansi::YELLOW));
        }
        output.push('\n');
    }

    fn format_summary(&self, holes: &[CheckedHole]) -> String {
        let (records, failures, failed_holes) =
            holes.iter().fold((0, 0, 0), |(r, f, h), hole| {
                let report = &hole.report;
                (
                    r + report.records_checked,
                    f + report.entries.len(),
                    h + usize::from(report.has_failures()),
                )
            });
        let passed = holes.len() - failed_holes;
        let passed_str = self.colorize(&passed.to_string(), ansi::GREEN);
        let failed_str = self.colorize(&failed_holes.to_string(), ansi::RED);

        format!(
            "Summary: {} holes checked, {records} records, {passed_str} passed, {failed_str} failed, {failures} rule failures",
            holes.len()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, holes: &[CheckedHole]) -> Result<String> {
        let mut output = String::new();

        for hole in holes.iter().filter(|h| h.report.has_failures()) {
            self.format_hole(hole, &mut output);
            output.push('\n');
        }

        // Clean holes only in verbose mode
        if self.verbose >= 1 {
            for hole in holes.iter().filter(|h| h.report.is_clean()) {
                self.format_hole(hole, &mut output);
                output.push('\n');
            }
        }

        let _ = writeln!(output, "{}", self.format_summary(holes));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
