use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::language::{Language, LanguageRegistry};

use super::csv::escape_field;
use super::{OutputFormat, ansi};

/// Render the registry's languages in configuration order.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_languages(
    registry: &LanguageRegistry,
    format: OutputFormat,
    use_colors: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_languages_text(registry, use_colors)),
        OutputFormat::Csv => Ok(format_languages_csv(registry)),
        OutputFormat::Json => format_languages_json(registry),
    }
}

fn line_comments(language: &Language) -> String {
    language.comment_syntax.line_comments.join(" ")
}

fn block_comments(language: &Language) -> String {
    language
        .comment_syntax
        .block_comments
        .iter()
        .map(|(start, end)| format!("{start} {end}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn matches(language: &Language) -> String {
    language
        .extensions
        .iter()
        .chain(&language.filenames)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_languages_text(registry: &LanguageRegistry, use_colors: bool) -> String {
    let name_width = registry
        .list_all()
        .map(|l| l.name.chars().count())
        .fold("Language".len(), usize::max);
    let match_width = registry
        .list_all()
        .map(|l| matches(l).chars().count())
        .fold("Files".len(), usize::max);
    let line_width = registry
        .list_all()
        .map(|l| line_comments(l).chars().count())
        .fold("Line".len(), usize::max);

    let mut output = String::new();
    let header = format!(
        "{:<name_width$}  {:<match_width$}  {:<line_width$}  Block",
        "Language", "Files", "Line"
    );
    if use_colors {
        writeln!(output, "{}{header}{}", ansi::BOLD, ansi::RESET).ok();
    } else {
        writeln!(output, "{header}").ok();
    }

    for language in registry.list_all() {
        let row = format!(
            "{:<name_width$}  {:<match_width$}  {:<line_width$}  {}",
            language.name,
            matches(language),
            line_comments(language),
            block_comments(language)
        );
        writeln!(output, "{}", row.trim_end()).ok();
    }

    writeln!(output, "{} languages", registry.len()).ok();
    output
}

#[must_use]
pub fn format_languages_csv(registry: &LanguageRegistry) -> String {
    let mut output = String::from("Language,Extensions,Filenames,LineComments,BlockComments\n");
    for language in registry.list_all() {
        writeln!(
            output,
            "{},{},{},{},{}",
            escape_field(&language.name),
            escape_field(&language.extensions.join(" ")),
            escape_field(&language.filenames.join(" ")),
            escape_field(&line_comments(language)),
            escape_field(&block_comments(language))
        )
        .ok();
    }
    output
}

#[derive(Serialize)]
struct LanguagesOutput<'a> {
    languages: Vec<&'a Language>,
}

/// # Errors
/// Returns an error if serialization fails.
pub fn format_languages_json(registry: &LanguageRegistry) -> Result<String> {
    let output = LanguagesOutput {
        languages: registry.list_all().collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
