use std::fmt::Write;

use crate::error::Result;

use super::{OutputFormatter, ScanReport};

pub const CSV_HEADER: &str = "File,Language,Code,Comments,Blank";

/// Quote a field when it contains a comma, a quote or a line break.
#[must_use]
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// One row per file followed by a `Total` row.
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();
        output.push_str(CSV_HEADER);
        output.push('\n');

        for file in report.files() {
            writeln!(
                output,
                "{},{},{},{},{}",
                escape_field(&report.display_path(file)),
                escape_field(&file.language_name),
                file.code_line_count,
                file.comment_line_count,
                file.blank_line_count
            )
            .ok();
        }

        let totals = report.totals();
        writeln!(
            output,
            "Total,,{},{},{}",
            totals.code, totals.comment, totals.blank
        )
        .ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
