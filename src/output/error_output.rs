//! Fatal error diagnostics on stderr.
//!
//! Format: `✖ {type}: {message}` / `  × {detail}` / `  help: {suggestion}`

use std::io::{IsTerminal, Write};

use crate::error::ClocError;

use super::{ColorMode, ansi};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Print a `ClocError` with its cause and a hint when one applies.
    pub fn print(&self, err: &ClocError) {
        let mut stderr = std::io::stderr().lock();
        self.write_cloc_error(&mut stderr, err);
    }

    pub fn write_cloc_error<W: Write>(&self, w: &mut W, err: &ClocError) {
        self.write_error(
            w,
            err.error_type(),
            &err.to_string(),
            err.detail().as_deref(),
            suggestion(err),
        );
    }

    /// Writes error to a writer (for testing).
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Nothing useful can be done if stderr itself is gone.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

const fn suggestion(err: &ClocError) -> Option<&'static str> {
    match err {
        ClocError::InvalidPattern { .. } => {
            Some("Use `*` for any run of characters and `.` for a literal dot")
        }
        ClocError::Walk { .. } => Some("Check that the path exists and is readable"),
        ClocError::TomlParse(_) | ClocError::JsonParse(_) => {
            Some("Run with --print-languages --format json to see the expected layout")
        }
        _ => None,
    }
}

/// Print a `ClocError` honoring the requested color mode.
pub fn print_error(err: &ClocError, mode: ColorMode) {
    ErrorOutput::new(mode).print(err);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
