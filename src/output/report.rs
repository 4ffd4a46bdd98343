use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::counter::FileScanResult;

use super::path::display_path;

/// Aggregated counts across every file in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    pub files: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl ReportTotals {
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.code + self.comment + self.blank
    }

    fn add(&mut self, result: &FileScanResult) {
        self.files += 1;
        self.code += result.code_line_count;
        self.comment += result.comment_line_count;
        self.blank += result.blank_line_count;
    }
}

/// Order results by code lines (largest first), then by path.
pub fn sort_results(results: &mut [FileScanResult]) {
    results.sort_by(|a, b| {
        b.code_line_count
            .cmp(&a.code_line_count)
            .then_with(|| a.file_path.cmp(&b.file_path))
    });
}

/// Sorted per-file results plus their totals, ready for rendering.
#[derive(Debug, Clone)]
pub struct ScanReport {
    base_dir: PathBuf,
    files: Vec<FileScanResult>,
    totals: ReportTotals,
}

impl ScanReport {
    /// Build a report. Paths are displayed relative to `base_dir` when they
    /// live under it.
    #[must_use]
    pub fn new(base_dir: &Path, mut files: Vec<FileScanResult>) -> Self {
        sort_results(&mut files);
        let mut totals = ReportTotals::default();
        for file in &files {
            totals.add(file);
        }

        Self {
            base_dir: base_dir.to_path_buf(),
            files,
            totals,
        }
    }

    #[must_use]
    pub fn files(&self) -> &[FileScanResult] {
        &self.files
    }

    #[must_use]
    pub const fn totals(&self) -> &ReportTotals {
        &self.totals
    }

    #[must_use]
    pub fn display_path(&self, file: &FileScanResult) -> String {
        display_path(&file.file_path, Some(&self.base_dir))
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
