//! Configuration constants and validation functions for the splitter.

use std::path::{Component, Path};

use crate::error::{Result, SplitterError};

/// Stylesheet read when no `--input` is given.
pub const DEFAULT_INPUT_PATH: &str = "styles.css";

/// Base directory for split output when no `--output` is given.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Destination for content before the first header and for unclassified sections.
pub const DEFAULT_FALLBACK_DESTINATION: &str = "css/misc/unclassified.css";

/// Marker that opens a stylesheet comment.
pub const COMMENT_OPEN: &str = "/*";

/// Marker that closes a stylesheet comment.
pub const COMMENT_CLOSE: &str = "*/";

/// Number of leading tokens inspected by the report.
pub const PREVIEW_TOKEN_LIMIT: usize = 20;

/// Maximum number of characters shown per header preview.
pub const PREVIEW_WIDTH: usize = 60;

/// Maximum mapping file size in bytes (1 MB).
///
/// A mapping table is a few dozen lines; anything larger is not a mapping file.
pub const MAX_MAPPING_FILE_SIZE: u64 = 1_000_000;

/// Validate a destination path from the mapping table.
///
/// Destinations are joined onto the output directory, so they must be
/// relative and must not climb out of it.
///
/// # Examples
/// ```
/// use css_splitter::config::validate_destination;
///
/// assert!(validate_destination("css/base/reset.css").is_ok());
/// assert!(validate_destination("../outside.css").is_err());
/// assert!(validate_destination("/etc/passwd").is_err());
/// ```
pub fn validate_destination(destination: &str) -> Result<()> {
    if destination.trim().is_empty() {
        return Err(SplitterError::InvalidDestination(destination.to_string()));
    }

    let escapes = Path::new(destination).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(SplitterError::InvalidDestination(destination.to_string()));
    }

    Ok(())
}

/// Validate a destination path and bring it to canonical form.
///
/// `.` components and repeated separators are dropped so that aliases of
/// the same file compare equal.
///
/// # Examples
/// ```
/// use css_splitter::config::normalize_destination;
///
/// assert_eq!(normalize_destination("./css//x.css").unwrap(), "css/x.css");
/// assert!(normalize_destination("./.").is_err());
/// ```
pub fn normalize_destination(destination: &str) -> Result<String> {
    validate_destination(destination)?;

    let parts: Vec<String> = Path::new(destination)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        return Err(SplitterError::InvalidDestination(destination.to_string()));
    }

    Ok(parts.join("/"))
}

/// Check whether a token looks like a comment header once trimmed.
///
/// # Examples
/// ```
/// use css_splitter::config::is_header_like;
///
/// assert!(is_header_like("  /* Footer */\n"));
/// assert!(!is_header_like("body { margin: 0; }"));
/// ```
#[must_use]
pub fn is_header_like(text: &str) -> bool {
    text.trim().starts_with(COMMENT_OPEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_destination_valid() {
        assert!(validate_destination("css/base/reset.css").is_ok());
        assert!(validate_destination("reset.css").is_ok());
        assert!(validate_destination("./css/layout/header.css").is_ok());
    }

    #[test]
    fn test_validate_destination_invalid() {
        assert!(validate_destination("").is_err());
        assert!(validate_destination("   ").is_err());
        assert!(validate_destination("../reset.css").is_err());
        assert!(validate_destination("css/../../reset.css").is_err());
        assert!(validate_destination("/tmp/reset.css").is_err());
    }

    #[test]
    fn test_normalize_destination() {
        assert_eq!(normalize_destination("css/x.css").unwrap(), "css/x.css");
        assert_eq!(normalize_destination("./css/x.css").unwrap(), "css/x.css");
        assert_eq!(normalize_destination("css//./x.css").unwrap(), "css/x.css");
        assert_eq!(normalize_destination("css/x.css/").unwrap(), "css/x.css");
        assert!(normalize_destination(".").is_err());
        assert!(normalize_destination("../x.css").is_err());
    }

    #[test]
    fn test_is_header_like() {
        assert!(is_header_like("/* Base Reset */"));
        assert!(is_header_like("\n\n  /* Modal */"));
        assert!(is_header_like("/* unterminated"));
        assert!(!is_header_like(""));
        assert!(!is_header_like(" a "));
        assert!(!is_header_like("a /* late */"));
    }

    #[test]
    fn test_constants_are_reasonable() {
        assert_eq!(COMMENT_OPEN.len(), 2);
        assert_eq!(COMMENT_CLOSE.len(), 2);
        assert!(PREVIEW_TOKEN_LIMIT > 0);
        assert!(PREVIEW_WIDTH > 0);
        assert!(validate_destination(DEFAULT_FALLBACK_DESTINATION).is_ok());
    }
}
