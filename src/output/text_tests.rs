use super::*;
use crate::rules::{RecordRef, RuleId};

fn entry(index: usize, rule: RuleId, severity: Severity, message: &str) -> BatchEntry {
    BatchEntry {
        source: RecordRef {
            index,
            id: Some(format!("gm-{index}")),
        },
        rule,
        severity,
        message: message.to_string(),
    }
}

fn failing_hole() -> CheckedHole {
    CheckedHole::new(
        "DH-01",
        BatchReport {
            entries: vec![
                entry(
                    1,
                    RuleId::IntervalOrder,
                    Severity::Blocking,
                    "\"Interval From\" must be less than \"Interval To\"",
                ),
                entry(2, RuleId::Code(6), Severity::Error, "Whole core mismatch"),
            ],
            records_checked: 3,
            records_skipped: 0,
        },
    )
}

fn clean_hole() -> CheckedHole {
    CheckedHole::new(
        "DH-02",
        BatchReport {
            entries: Vec::new(),
            records_checked: 4,
            records_skipped: 1,
        },
    )
}

#[test]
fn failing_hole_lists_rows_and_codes() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&[failing_hole()])
        .unwrap();
    assert!(output.contains("✗ FAILED: DH-01 (2 of 3 records failing)"));
    assert!(output.contains("  row 2      -  \"Interval From\" must be less than \"Interval To\" [blocking]"));
    assert!(output.contains("  row 3     #6  Whole core mismatch\n"));
}

#[test]
fn clean_holes_hidden_unless_verbose() {
    let holes = [failing_hole(), clean_hole()];
    let quiet = TextFormatter::new(ColorMode::Never).format(&holes).unwrap();
    assert!(!quiet.contains("DH-02"));

    let verbose = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&holes)
        .unwrap();
    assert!(verbose.contains("✓ PASSED: DH-02 (4 records)"));
}

#[test]
fn summary_counts_holes_records_and_failures() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&[failing_hole(), clean_hole()])
        .unwrap();
    assert!(output.ends_with(
        "Summary: 2 holes checked, 7 records, 1 passed, 1 failed, 2 rule failures\n"
    ));
}

#[test]
fn always_mode_emits_ansi() {
    let output = TextFormatter::new(ColorMode::Always)
        .format(&[failing_hole()])
        .unwrap();
    assert!(output.contains("\x1b[31mFAILED\x1b[0m"));
}

#[test]
fn empty_input_still_prints_summary() {
    let output = TextFormatter::new(ColorMode::Never).format(&[]).unwrap();
    assert_eq!(
        output,
        "Summary: 0 holes checked, 0 records, 0 passed, 0 failed, 0 rule failures\n"
    );
}
