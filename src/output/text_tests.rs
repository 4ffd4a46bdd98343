use std::path::Path;

use super::*;
use crate::output::test_fixtures::{result, sample_report};

fn plain(report: &ScanReport) -> String {
    TextFormatter::with_colors(false).format(report).unwrap()
}

#[test]
fn text_rows_are_aligned() {
    let output = plain(&sample_report());
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "File         Language  Code  Comments  Blank");
    assert_eq!(lines[1], "-".repeat(44));
    assert_eq!(lines[2], "main.py      Python     120        30     12");
    assert_eq!(lines[3], "src/app.go   Go          40         2      3");
    assert_eq!(lines[4], "src/util.go  Go          40        10      5");
}

#[test]
fn text_ends_with_total_and_summary() {
    let output = plain(&sample_report());
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[6], "Total                   200        42     20");
    assert_eq!(
        lines[7],
        "3 files, 262 lines (200 code, 42 comments, 20 blank)"
    );
    assert_eq!(lines.len(), 8);
}

#[test]
fn text_without_colors_has_no_escape_codes() {
    let output = plain(&sample_report());
    assert!(!output.contains('\x1b'));
}

#[test]
fn text_with_colors_highlights_header() {
    let formatter = TextFormatter::with_colors(true);
    let output = formatter.format(&sample_report()).unwrap();

    assert!(output.starts_with(ansi::BOLD));
    assert!(output.contains(ansi::CYAN));
    assert!(output.contains(ansi::RESET));
}

#[test]
fn wide_counts_widen_columns() {
    let report = ScanReport::new(
        Path::new("/r"),
        vec![result("/r/big.go", "Go", 1_234_567, 0, 0)],
    );
    let output = plain(&report);

    assert!(output.contains("big.go  Go        1234567"));
}

#[test]
fn empty_report_still_prints_totals() {
    let report = ScanReport::new(Path::new("/r"), Vec::new());
    let output = plain(&report);

    assert!(output.contains("Total"));
    assert!(output.contains("0 files, 0 lines (0 code, 0 comments, 0 blank)"));
}

#[test]
fn digits_counts_decimal_places() {
    assert_eq!(digits(0), 1);
    assert_eq!(digits(9), 1);
    assert_eq!(digits(10), 2);
    assert_eq!(digits(1_000_000), 7);
}
