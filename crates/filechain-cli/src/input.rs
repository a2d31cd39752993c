//! Path-list input handling.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read path list: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read paths from a list file, one per line.
///
/// Blank lines and lines starting with `#` are ignored; surrounding
/// whitespace is trimmed.
pub fn read_path_list(path: &Path) -> Result<Vec<PathBuf>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}
