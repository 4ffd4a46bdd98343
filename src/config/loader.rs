use std::path::Path;

use tracing::debug;

use crate::error::{ClocError, Result};

use super::FileSystem;
use super::model::{LanguageDefinition, LanguagesFile};

/// On-disk format of a language override file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguagesFormat {
    Toml,
    Json,
}

impl LanguagesFormat {
    /// `.json` files are parsed as JSON; everything else as TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json { Self::Json } else { Self::Toml }
    }
}

fn read_file(fs: &impl FileSystem, path: &Path) -> Result<String> {
    fs.read_to_string(path)
        .map_err(|source| ClocError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse language definitions from the text of an override file.
///
/// # Errors
/// Returns an error if the content is malformed, declares no languages, or
/// contains a language with an empty name.
pub fn parse_language_definitions(
    content: &str,
    format: LanguagesFormat,
) -> Result<Vec<LanguageDefinition>> {
    let file: LanguagesFile = match format {
        LanguagesFormat::Toml => toml::from_str(content)?,
        LanguagesFormat::Json => serde_json::from_str(content).map_err(ClocError::JsonParse)?,
    };

    if file.languages.is_empty() {
        return Err(ClocError::Config(
            "language configuration defines no languages".to_string(),
        ));
    }

    if let Some(pos) = file.languages.iter().position(|l| l.name.trim().is_empty()) {
        return Err(ClocError::Config(format!(
            "language #{} has an empty name",
            pos + 1
        )));
    }

    Ok(file.languages)
}

/// Read and parse a language override file.
///
/// # Errors
/// Returns an error if the file is missing, unreadable, or malformed.
pub fn load_language_definitions(
    fs: &impl FileSystem,
    path: &Path,
) -> Result<Vec<LanguageDefinition>> {
    if !fs.exists(path) {
        return Err(ClocError::Config(format!(
            "Language configuration not found: {}",
            path.display()
        )));
    }

    debug!(path = %path.display(), "loading language configuration");
    let content = read_file(fs, path)?;
    let definitions = parse_language_definitions(&content, LanguagesFormat::from_path(path))?;
    debug!(count = definitions.len(), "loaded language definitions");
    Ok(definitions)
}

/// Split ignore-file content into patterns: one per non-blank line, trimmed.
/// There is no comment syntax; a line starting with `#` is a pattern too.
#[must_use]
pub fn parse_ignore_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read an ignore-pattern file.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn load_ignore_patterns(fs: &impl FileSystem, path: &Path) -> Result<Vec<String>> {
    debug!(path = %path.display(), "reading ignore file");
    let content = read_file(fs, path)?;
    let patterns = parse_ignore_patterns(&content);
    debug!(?patterns, "ignore patterns");
    Ok(patterns)
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
