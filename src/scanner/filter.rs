use std::path::Path;

use regex::Regex;

use crate::error::{ClocError, Result};
use crate::language::LanguageRegistry;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps files whose language the registry recognizes.
pub struct LanguageFilter<'a> {
    registry: &'a LanguageRegistry,
}

impl<'a> LanguageFilter<'a> {
    #[must_use]
    pub const fn new(registry: &'a LanguageRegistry) -> Self {
        Self { registry }
    }
}

impl FileFilter for LanguageFilter<'_> {
    fn should_include(&self, path: &Path) -> bool {
        self.registry.lookup_path(path).is_some()
    }
}

/// Convert a glob-like ignore pattern into an anchored regular expression.
///
/// `.` matches only a literal dot and `*` matches any run of characters,
/// path separators included. Every other character is passed to the regex
/// engine unchanged.
#[must_use]
pub fn pattern_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push('^');
    for c in pattern.chars() {
        match c {
            '.' => regex.push_str("\\."),
            '*' => regex.push_str(".*"),
            other => regex.push(other),
        }
    }
    regex.push('$');
    regex
}

struct CompiledPattern {
    source: String,
    regex: Regex,
}

/// Compiled ignore patterns, matched against whole path strings.
#[derive(Default)]
pub struct IgnorePatterns {
    patterns: Vec<CompiledPattern>,
}

impl IgnorePatterns {
    /// Compile ignore patterns.
    ///
    /// # Errors
    /// Returns an error if a pattern does not form a valid regular expression.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                let regex = Regex::new(&pattern_to_regex(pattern)).map_err(|source| {
                    ClocError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    }
                })?;
                Ok(CompiledPattern {
                    source: pattern.clone(),
                    regex,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// The first pattern matching `path`, if any.
    #[must_use]
    pub fn find_match(&self, path: &Path) -> Option<&str> {
        let path = path.to_string_lossy();
        self.patterns
            .iter()
            .find(|p| p.regex.is_match(&path))
            .map(|p| p.source.as_str())
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
