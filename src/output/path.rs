//! Path display helpers shared by every report format.

use std::path::Path;

/// Format a path for display, relative to `base` when it lives under it.
///
/// Separators are always forward slashes. A path equal to `base` displays
/// as `"."`.
#[must_use]
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    let relative = base
        .and_then(|base| path.strip_prefix(base).ok())
        .unwrap_or(path);

    let result = normalize_separators(&relative.to_string_lossy());
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
