mod defaults;
mod registry;

pub use registry::{CommentSyntax, Language, LanguageRegistry, file_suffix};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
