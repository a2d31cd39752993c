//! Extension extraction from file paths.
//!
//! The extraction is path-based only (no I/O): the only attribute the
//! chain ever derives from a path is the lowercased extension of its
//! final component.

use std::path::Path;

/// Lowercased extension of the final path component, or `""` when absent.
///
/// Hidden files (`.gitignore`), trailing dots (`ddd.`), and bare names
/// (`ddd`) all yield the empty string and therefore never match a handler.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}
