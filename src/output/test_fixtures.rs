use std::path::{Path, PathBuf};

use crate::counter::FileScanResult;

use super::ScanReport;

pub fn result(
    path: &str,
    language: &str,
    code: usize,
    comment: usize,
    blank: usize,
) -> FileScanResult {
    FileScanResult {
        file_path: PathBuf::from(path),
        language_name: language.to_string(),
        code_line_count: code,
        blank_line_count: blank,
        comment_line_count: comment,
    }
}

pub fn sample_report() -> ScanReport {
    ScanReport::new(
        Path::new("/repo"),
        vec![
            result("/repo/src/util.go", "Go", 40, 10, 5),
            result("/repo/main.py", "Python", 120, 30, 12),
            result("/repo/src/app.go", "Go", 40, 2, 3),
        ],
    )
}
