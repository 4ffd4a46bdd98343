mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{
    LanguagesFormat, load_ignore_patterns, load_language_definitions, parse_ignore_patterns,
    parse_language_definitions,
};
pub use model::{LanguageDefinition, LanguagesFile};
