use std::path::{Component, Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::error::{ClocError, Result};
use crate::logging::LogLevel;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

const LONG_ABOUT: &str = "Counts code, comment and blank lines per file, classified by each \
    language's comment syntax, and totals them across a directory tree.\n\n\
    The total number of code lines is printed alone on the last line of stdout.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error";

#[derive(Parser, Debug)]
#[command(
    name = "repo-cloc",
    author,
    version,
    about = "Count code, comment and blank lines in a source tree",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// File or directory to scan
    pub path: Option<String>,

    /// Print the supported languages and their comment syntax, then exit
    #[arg(long)]
    pub print_languages: bool,

    /// Languages file (TOML, or JSON when it ends in .json) replacing the built-in table
    #[arg(long, value_name = "FILE")]
    pub override_languages_path: Option<PathBuf>,

    /// File listing path patterns to exclude, one per line
    #[arg(long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Write per-file results to <results-directory-path>/<scan-id>.csv
    #[arg(long)]
    pub dump_csv: bool,

    /// Identifier for the scan; names the CSV file
    #[arg(long, value_name = "ID")]
    pub scan_id: Option<String>,

    /// Directory for CSV results [default: start time as YYYYMMDD_HHMMSS]
    #[arg(long, value_name = "DIR")]
    pub results_directory_path: Option<PathBuf>,

    /// Output format for stdout [possible values: text, csv, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Diagnostic log level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value = "info", ignore_case = true)]
    pub log_level: LogLevel,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Check flag combinations clap cannot express.
    ///
    /// # Errors
    /// Returns a configuration error describing the first invalid combination.
    pub fn validate(&self) -> Result<()> {
        if self.print_languages {
            return Ok(());
        }
        if self.path.is_none() {
            return Err(ClocError::Config(
                "a path to the file or directory to scan is required, e.g. 'repo-cloc src'"
                    .to_string(),
            ));
        }
        if self.dump_csv && self.scan_id.as_deref().is_none_or(str::is_empty) {
            return Err(ClocError::Config(
                "--scan-id is required with --dump-csv".to_string(),
            ));
        }
        if !self.dump_csv && self.results_directory_path.is_some() {
            return Err(ClocError::Config(
                "--results-directory-path requires --dump-csv".to_string(),
            ));
        }
        Ok(())
    }

    /// The scan root with quoting artefacts removed and lexically cleaned.
    #[must_use]
    pub fn scan_path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(clean_path)
    }
}

/// Drop a trailing `"` (left by Windows shells quoting a path that ends in a
/// backslash), then remove `.` components and fold `..` where possible.
#[must_use]
pub fn clean_path(raw: &str) -> PathBuf {
    let trimmed = raw.strip_suffix('"').unwrap_or(raw);
    let mut cleaned = PathBuf::new();
    let mut depth = 0usize;

    for component in Path::new(trimmed).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir if depth > 0 => {
                cleaned.pop();
                depth -= 1;
            }
            Component::ParentDir => cleaned.push(".."),
            Component::Normal(part) => {
                cleaned.push(part);
                depth += 1;
            }
            Component::RootDir | Component::Prefix(_) => cleaned.push(component),
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
