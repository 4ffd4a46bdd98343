use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{FileSystem, LanguageDefinition, RealFileSystem, load_language_definitions};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentSyntax {
    pub line_comments: Vec<String>,
    pub block_comments: Vec<(String, String)>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(line_comments: Vec<&str>, block_comments: Vec<(&str, &str)>) -> Self {
        Self {
            line_comments: line_comments.into_iter().map(String::from).collect(),
            block_comments: block_comments
                .into_iter()
                .map(|(s, e)| (s.to_string(), e.to_string()))
                .collect(),
        }
    }

    /// The single-line prefix used for classification. Later entries are kept
    /// for listing but never matched.
    #[must_use]
    pub fn primary_line_comment(&self) -> Option<&str> {
        self.line_comments
            .first()
            .map(String::as_str)
            .filter(|prefix| !prefix.is_empty())
    }

    /// The block pair used for classification. Later pairs are kept for
    /// listing but never matched.
    #[must_use]
    pub fn primary_block_comment(&self) -> Option<(&str, &str)> {
        self.block_comments
            .first()
            .map(|(start, end)| (start.as_str(), end.as_str()))
            .filter(|(start, end)| !start.is_empty() && !end.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub filenames: Vec<String>,
    pub comment_syntax: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comment_syntax: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(normalize_extension).collect(),
            filenames: Vec::new(),
            comment_syntax,
        }
    }

    #[must_use]
    pub fn with_filenames(mut self, filenames: Vec<&str>) -> Self {
        self.filenames = filenames.into_iter().map(String::from).collect();
        self
    }
}

impl From<LanguageDefinition> for Language {
    fn from(def: LanguageDefinition) -> Self {
        Self {
            name: def.name,
            extensions: def
                .extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect(),
            filenames: def.filenames,
            comment_syntax: CommentSyntax {
                line_comments: def.line_comments,
                block_comments: def.block_comments,
            },
        }
    }
}

/// Lowercase an extension and make sure it carries its leading dot.
fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Suffix used for extension lookup: `.` plus the lowercased text after the
/// last dot, or `None` when the name has no dot at all.
///
/// A leading-dot name such as `.bashrc` has suffix `.bashrc`.
#[must_use]
pub fn file_suffix(file_name: &str) -> Option<String> {
    let (_, last) = file_name.rsplit_once('.')?;
    Some(format!(".{}", last.to_lowercase()))
}

/// Maps file extensions and extensionless file names to languages.
///
/// Languages are keyed by name and keep their registration order. When two
/// languages claim the same extension or file name, the one registered last
/// wins.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: IndexMap<String, Language>,
    extension_map: HashMap<String, usize>,
    filename_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: IndexMap::new(),
            extension_map: HashMap::new(),
            filename_map: HashMap::new(),
        }
    }

    /// Build a registry holding exactly the languages in `languages`.
    #[must_use]
    pub fn from_languages(languages: impl IntoIterator<Item = Language>) -> Self {
        let mut registry = Self::new();
        for language in languages {
            registry.register(language);
        }
        registry
    }

    /// Load a registry from a language configuration file, replacing the
    /// built-in table entirely.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(&RealFileSystem, path)
    }

    /// Like [`LanguageRegistry::load`], reading through the given filesystem.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub fn load_with(fs: &impl FileSystem, path: &Path) -> Result<Self> {
        let definitions = load_language_definitions(fs, path)?;
        Ok(Self::from_languages(
            definitions.into_iter().map(Language::from),
        ))
    }

    pub fn register(&mut self, language: Language) {
        let name = language.name.clone();
        let (idx, previous) = self.languages.insert_full(name, language);

        // A redefinition drops the old language's claims before adding new ones.
        if previous.is_some() {
            self.extension_map.retain(|_, &mut i| i != idx);
            self.filename_map.retain(|_, &mut i| i != idx);
        }

        let language = &self.languages[idx];
        for ext in &language.extensions {
            self.extension_map.insert(ext.clone(), idx);
        }
        for filename in &language.filenames {
            self.filename_map.insert(filename.clone(), idx);
        }
    }

    #[must_use]
    pub fn lookup_by_extension(&self, suffix: &str) -> Option<&Language> {
        let idx = *self.extension_map.get(suffix)?;
        Some(&self.languages[idx])
    }

    #[must_use]
    pub fn lookup_by_filename(&self, name: &str) -> Option<&Language> {
        let idx = *self.filename_map.get(name)?;
        Some(&self.languages[idx])
    }

    /// Resolve the language of a path: extension lookup when the file name has
    /// a suffix, file name lookup otherwise.
    #[must_use]
    pub fn lookup_path(&self, path: &Path) -> Option<&Language> {
        let file_name = path.file_name()?.to_string_lossy();
        match file_suffix(&file_name) {
            Some(suffix) => self.lookup_by_extension(&suffix),
            None => self.lookup_by_filename(&file_name),
        }
    }

    /// All languages in registration order.
    pub fn list_all(&self) -> impl ExactSizeIterator<Item = &Language> {
        self.languages.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::from_languages(super::defaults::builtin_languages())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
