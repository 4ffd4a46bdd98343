use std::io::{IsTerminal, Write};

use crate::EXIT_SUCCESS;
use crate::cli::Cli;
use crate::error::Result;
use crate::output::format_languages;

use super::{color_choice_to_mode, load_registry, report_failure};

#[must_use]
pub fn run_languages(cli: &Cli) -> i32 {
    let mut stdout = std::io::stdout().lock();
    let use_colors = color_choice_to_mode(cli.color).use_colors(stdout.is_terminal());
    match run_languages_to(cli, use_colors, &mut stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_failure(&e, cli),
    }
}

/// List the languages in effect (the override file's when one is given).
///
/// # Errors
/// Returns an error if the override file cannot be loaded or output fails.
pub fn run_languages_to<W: Write>(cli: &Cli, use_colors: bool, out: &mut W) -> Result<()> {
    let registry = load_registry(cli.override_languages_path.as_deref())?;
    let listing = format_languages(&registry, cli.format, use_colors)?;
    out.write_all(listing.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
