//! Error types for the stylesheet splitter.
//!
//! Pattern mismatches are not errors: a header that matches no mapping
//! entry classifies as unclassified. Everything here is fatal for the run.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Input stylesheet could not be read (missing, permissions, invalid UTF-8).
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mapping file could not be read.
    #[error("Failed to read mapping file {}: {source}", .path.display())]
    ReadMapping {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output path exists but is not a directory.
    #[error("Output path is not a directory: {}", .0.display())]
    InvalidOutput(PathBuf),

    /// IO error while writing output files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A mapping pattern is not a valid regular expression.
    #[error("Invalid mapping pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A destination path is empty, absolute, or escapes the output directory.
    #[error("Invalid destination path: '{0}'. Expected a relative path without '..'")]
    InvalidDestination(String),

    /// Mapping file is not valid YAML or has the wrong shape.
    #[error("Failed to parse mapping file: {0}")]
    MappingParse(#[from] serde_yaml_ng::Error),

    /// Mapping file exceeds the size limit.
    #[error("Mapping file too large: {size} bytes (max {max})")]
    MappingTooLarge { size: u64, max: u64 },
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
