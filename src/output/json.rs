use serde::Serialize;

use crate::counter::FileScanResult;
use crate::error::Result;

use super::{OutputFormatter, ScanReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    files: Vec<FileEntry<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    code: usize,
    comment: usize,
    blank: usize,
    total: usize,
}

#[derive(Serialize)]
struct FileEntry<'a> {
    path: String,
    language: &'a str,
    code: usize,
    comment: usize,
    blank: usize,
    total: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let totals = report.totals();
        let output = JsonOutput {
            summary: Summary {
                total_files: totals.files,
                code: totals.code,
                comment: totals.comment,
                blank: totals.blank,
                total: totals.total_lines(),
            },
            files: report
                .files()
                .iter()
                .map(|file| convert_result(report, file))
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result<'a>(report: &ScanReport, file: &'a FileScanResult) -> FileEntry<'a> {
    FileEntry {
        path: report.display_path(file),
        language: &file.language_name,
        code: file.code_line_count,
        comment: file.comment_line_count,
        blank: file.blank_line_count,
        total: file.total_lines(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
