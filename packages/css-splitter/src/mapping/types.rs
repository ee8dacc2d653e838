//! Types for the header mapping table.

use std::fmt;

use regex::Regex;

use crate::config::normalize_destination;
use crate::error::{Result, SplitterError};

/// A single `(pattern, destination)` record.
#[derive(Debug, Clone)]
pub struct MappingRule {
    /// Compiled header pattern. Matches anywhere in the trimmed header.
    pub pattern: Regex,

    /// Normalized destination path, relative to the output directory.
    pub destination: String,
}

impl MappingRule {
    /// Create a rule, compiling the pattern and validating the destination.
    pub fn new(pattern: &str, destination: impl Into<String>) -> Result<Self> {
        let destination = normalize_destination(&destination.into())?;

        let pattern = Regex::new(pattern).map_err(|source| SplitterError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern,
            destination,
        })
    }

    /// Check whether this rule matches the given header text.
    #[must_use]
    pub fn matches(&self, header: &str) -> bool {
        self.pattern.is_match(header)
    }
}

/// Outcome of classifying a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'t> {
    /// Destination of the first matching rule.
    Destination(&'t str),

    /// No rule matched. Callers decide the fallback.
    Unclassified,
}

impl<'t> Classification<'t> {
    /// The destination, if any rule matched.
    #[must_use]
    pub fn destination(&self) -> Option<&'t str> {
        match *self {
            Self::Destination(d) => Some(d),
            Self::Unclassified => None,
        }
    }

    /// Whether no rule matched.
    #[must_use]
    pub fn is_unclassified(&self) -> bool {
        matches!(self, Self::Unclassified)
    }
}

impl fmt::Display for Classification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Destination(d) => f.write_str(d),
            Self::Unclassified => f.write_str("unclassified"),
        }
    }
}
