use serde::{Deserialize, Serialize};

/// Top-level shape of a language override file.
///
/// ```toml
/// [[languages]]
/// name = "Go"
/// extensions = [".go"]
/// line_comments = ["//"]
/// block_comments = [["/*", "*/"]]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguagesFile {
    #[serde(default)]
    pub languages: Vec<LanguageDefinition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageDefinition {
    pub name: String,

    #[serde(default)]
    pub extensions: Vec<String>,

    /// Exact names for files without an extension (e.g. `Dockerfile`).
    #[serde(default)]
    pub filenames: Vec<String>,

    #[serde(default)]
    pub line_comments: Vec<String>,

    #[serde(default)]
    pub block_comments: Vec<(String, String)>,
}
