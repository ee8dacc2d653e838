//! Stylesheet file reading.

use std::fs;
use std::path::Path;

use crate::error::{Result, SplitterError};

/// Read a stylesheet fully into memory.
///
/// Missing files, permission problems and invalid UTF-8 all surface as
/// [`SplitterError::ReadInput`] naming the path.
pub fn read_stylesheet(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| SplitterError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "Read stylesheet");

    Ok(text)
}
