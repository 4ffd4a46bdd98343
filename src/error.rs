use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClocError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ignore pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to walk directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error")]
    JsonParse(#[source] serde_json::Error),

    #[error("JSON serialization error")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ClocError {
    /// Short category name used as the heading of a printed diagnostic.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::JsonParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Walk { .. } => "Walk",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Underlying cause, when the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        std::error::Error::source(self).map(ToString::to_string)
    }
}

pub type Result<T> = std::result::Result<T, ClocError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
