use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::language::LanguageRegistry;

use super::sloc::{LineStats, SlocCounter, feed_lines};

/// Line counts for one scanned file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileScanResult {
    pub file_path: PathBuf,
    /// Empty when the language could not be determined or the file could not
    /// be opened.
    pub language_name: String,
    pub code_line_count: usize,
    pub blank_line_count: usize,
    pub comment_line_count: usize,
}

impl FileScanResult {
    /// Zero-valued result for a file that contributed nothing.
    #[must_use]
    pub fn empty(file_path: &Path) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_stats(file_path: &Path, language_name: &str, stats: LineStats) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
            language_name: language_name.to_string(),
            code_line_count: stats.code,
            blank_line_count: stats.blank,
            comment_line_count: stats.comment,
        }
    }

    /// Lines read from the file.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.code_line_count + self.blank_line_count + self.comment_line_count
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !self.language_name.is_empty()
    }
}

/// Source of file contents (for testability).
pub trait FileReader: Send + Sync {
    /// Open a file for streamed, line-oriented reading.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>>;
}

/// Real filesystem implementation of `FileReader`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Count the lines of one file from disk.
///
/// Never fails: an unrecognized or unreadable file yields a zero result so
/// one bad file cannot abort a batch.
#[must_use]
pub fn scan_file(path: &Path, registry: &LanguageRegistry) -> FileScanResult {
    scan_file_with(path, registry, &RealFileReader)
}

#[must_use]
pub fn scan_file_with(
    path: &Path,
    registry: &LanguageRegistry,
    reader: &dyn FileReader,
) -> FileScanResult {
    let Some(language) = registry.lookup_path(path) else {
        debug!(path = %path.display(), "skipping file: language not recognized");
        return FileScanResult::empty(path);
    };

    let source = match reader.open(path) {
        Ok(source) => source,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to open file, counting as 0");
            return FileScanResult::empty(path);
        }
    };

    let counter = SlocCounter::new(&language.comment_syntax);
    let mut tally = counter.tally();
    if let Err(err) = feed_lines(source, &mut tally) {
        warn!(
            path = %path.display(),
            error = %err,
            lines = tally.stats().total(),
            "read error, keeping lines counted so far"
        );
    }

    FileScanResult::from_stats(path, &language.name, tally.stats())
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
