pub mod languages;
pub mod scan;

pub use languages::{run_languages, run_languages_to};
pub use scan::{count_files, run_scan, run_scan_to};

use std::path::Path;

use crate::EXIT_CONFIG_ERROR;
use crate::cli::{Cli, ColorChoice};
use crate::error::{ClocError, Result};
use crate::language::LanguageRegistry;
use crate::output::{ColorMode, print_error};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// The built-in table, or the override file's languages when one is given.
///
/// # Errors
/// Returns an error if the override file is missing or malformed.
pub fn load_registry(override_path: Option<&Path>) -> Result<LanguageRegistry> {
    override_path.map_or_else(|| Ok(LanguageRegistry::default()), LanguageRegistry::load)
}

/// Print a fatal error and map it to the process exit code.
#[must_use]
pub fn report_failure(err: &ClocError, cli: &Cli) -> i32 {
    print_error(err, color_choice_to_mode(cli.color));
    EXIT_CONFIG_ERROR
}
