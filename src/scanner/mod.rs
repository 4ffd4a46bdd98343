mod filter;

pub use filter::{FileFilter, IgnorePatterns, LanguageFilter, pattern_to_regex};

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{ClocError, Result};
use crate::language::LanguageRegistry;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive walker that prunes ignored entries and keeps filtered files.
///
/// Ignore patterns are matched against each entry's path as walked, i.e.
/// joined onto `root` exactly as the caller passed it. A matching directory
/// is not descended into.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    ignore: IgnorePatterns,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            ignore: IgnorePatterns::default(),
        }
    }

    #[must_use]
    pub fn with_ignore(mut self, ignore: IgnorePatterns) -> Self {
        self.ignore = ignore;
        self
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        let Some(pattern) = self.ignore.find_match(entry.path()) else {
            return false;
        };
        debug!(path = %entry.path().display(), pattern, "ignored");
        true
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_ignored(e));

        for entry in walker {
            let entry = entry.map_err(|source| ClocError::Walk {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            if !self.filter.should_include(entry.path()) {
                debug!(path = %entry.path().display(), "skipping file: language not recognized");
                continue;
            }

            files.push(std::path::absolute(entry.path())?);
        }

        debug!(root = %root.display(), count = files.len(), "walk complete");
        Ok(files)
    }
}

/// Collect every recognized source file under `root`.
///
/// # Errors
/// Returns an error if an ignore pattern is invalid or the walk fails.
pub fn walk(
    root: &Path,
    ignore_patterns: &[String],
    registry: &LanguageRegistry,
) -> Result<Vec<PathBuf>> {
    let ignore = IgnorePatterns::new(ignore_patterns)?;
    DirectoryScanner::new(LanguageFilter::new(registry))
        .with_ignore(ignore)
        .scan(root)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
