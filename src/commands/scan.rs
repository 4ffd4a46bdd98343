use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::EXIT_SUCCESS;
use crate::cli::Cli;
use crate::config::{RealFileSystem, load_ignore_patterns};
use crate::counter::{FileScanResult, scan_file};
use crate::error::{ClocError, Result};
use crate::language::LanguageRegistry;
use crate::output::{
    CsvFormatter, JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, ScanReport,
    TextFormatter,
};
use crate::scanner::walk;

use super::{color_choice_to_mode, load_registry, report_failure};

#[must_use]
pub fn run_scan(cli: &Cli) -> i32 {
    let mut stdout = std::io::stdout().lock();
    match run_scan_to(cli, &mut stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_failure(&e, cli),
    }
}

/// Walk, count and report, writing stdout output to `out`.
///
/// # Errors
/// Returns an error for a bad override or ignore file, an invalid ignore
/// pattern, a failed walk, or a failed write.
pub fn run_scan_to<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let root = cli
        .scan_path()
        .ok_or_else(|| ClocError::Config("no path to scan".to_string()))?;

    let registry = load_registry(cli.override_languages_path.as_deref())?;
    let ignore_patterns = match &cli.ignore_file {
        Some(path) => load_ignore_patterns(&RealFileSystem, path)?,
        None => Vec::new(),
    };

    info!(path = %root.display(), "scanning");
    let files = walk(&root, &ignore_patterns, &registry)?;
    debug!(count = files.len(), "files to count");

    let progress = ScanProgress::new(files.len(), cli.quiet);
    let results = count_files(&files, &registry, &progress);
    progress.finish();

    let report = ScanReport::new(&base_dir(&root)?, results);
    let total_code = report.totals().code;

    if cli.dump_csv {
        let csv_path = dump_csv(cli, &report)?;
        info!(path = %csv_path.display(), "results written");
    } else {
        let formatted = format_report(cli, &report)?;
        out.write_all(formatted.as_bytes())?;
    }

    info!(path = %root.display(), total_code, "total code lines");
    if cli.dump_csv || cli.format == OutputFormat::Text {
        writeln!(out, "{total_code}")?;
    }
    out.flush()?;
    Ok(())
}

/// Count every file in parallel. Results keep the order of `files`.
#[must_use]
pub fn count_files(
    files: &[PathBuf],
    registry: &LanguageRegistry,
    progress: &ScanProgress,
) -> Vec<FileScanResult> {
    files
        .par_iter()
        .map(|path| {
            let result = scan_file(path, registry);
            progress.inc();
            result
        })
        .collect()
}

/// Directory report paths are shown relative to.
fn base_dir(root: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(root)?;
    if !absolute.is_file() {
        return Ok(absolute);
    }
    let parent = absolute.parent().map(Path::to_path_buf);
    Ok(parent.unwrap_or(absolute))
}

fn format_report(cli: &Cli, report: &ScanReport) -> Result<String> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(color_choice_to_mode(cli.color));
            formatter.format(report)
        }
        OutputFormat::Csv => CsvFormatter.format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

/// Directory for CSV results; the start time when none was given.
fn results_directory(cli: &Cli) -> PathBuf {
    cli.results_directory_path.clone().unwrap_or_else(|| {
        PathBuf::from(chrono::Local::now().format("%Y%m%d_%H%M%S").to_string())
    })
}

fn dump_csv(cli: &Cli, report: &ScanReport) -> Result<PathBuf> {
    let scan_id = cli
        .scan_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ClocError::Config("--scan-id is required with --dump-csv".to_string()))?;

    let dir = results_directory(cli);
    if dir.is_dir() {
        debug!(path = %dir.display(), "results directory already exists");
    } else {
        fs::create_dir_all(&dir)?;
    }

    let csv_path = dir.join(format!("{scan_id}.csv"));
    fs::write(&csv_path, CsvFormatter.format(report)?)?;
    Ok(csv_path)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
