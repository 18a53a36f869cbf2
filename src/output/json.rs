use serde::Serialize;

use crate::error::Result;
use crate::rules::{BatchEntry, BatchReport, Severity};

use super::{CheckedHole, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    holes: Vec<HoleResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    holes: usize,
    passed: usize,
    failed: usize,
    records_checked: usize,
    records_skipped: usize,
    failures: usize,
    blocking: usize,
}

#[derive(Serialize)]
struct HoleResult<'a> {
    source: &'a str,
    status: &'static str,
    records_checked: usize,
    records_skipped: usize,
    failures: Vec<Failure<'a>>,
}

#[derive(Serialize)]
struct Failure<'a> {
    row: usize,
    record_id: Option<&'a str>,
    rule: String,
    error_code: Option<u8>,
    severity: Severity,
    message: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, holes: &[CheckedHole]) -> Result<String> {
        let failed = holes.iter().filter(|h| h.report.has_failures()).count();
        let output = JsonOutput {
            summary: Summary {
                holes: holes.len(),
                passed: holes.len() - failed,
                failed,
                records_checked: holes.iter().map(|h| h.report.records_checked).sum(),
                records_skipped: holes.iter().map(|h| h.report.records_skipped).sum(),
                failures: holes.iter().map(|h| h.report.entries.len()).sum(),
                blocking: holes.iter().map(|h| h.report.blocking_count()).sum(),
            },
            holes: holes.iter().map(convert_hole).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_hole(hole: &CheckedHole) -> HoleResult<'_> {
    let report = &hole.report;
    HoleResult {
        source: &hole.source,
        status: if report.is_clean() { "passed" } else { "failed" },
        records_checked: report.records_checked,
        records_skipped: report.records_skipped,
        failures: report.entries.iter().map(convert_entry).collect(),
    }
}

fn convert_entry(entry: &BatchEntry) -> Failure<'_> {
    Failure {
        row: BatchReport::row_number(entry),
        record_id: entry.source.id.as_deref(),
        rule: entry.rule.to_string(),
        error_code: entry.error_code(),
        severity: entry.severity,
        message: &entry.message,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
