//! Diagnostic summary of a token sequence.
//!
//! ```text
//! Found 5 sections
//!
//! 1: /* Base Reset */
//! 3: /* Container */
//! ```

use std::fmt;

use crate::config::{PREVIEW_TOKEN_LIMIT, PREVIEW_WIDTH};
use crate::types::Token;

/// A header-like token among the first tokens of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPreview {
    /// Position in the full token sequence.
    pub index: usize,

    /// Trimmed token text, cut to [`PREVIEW_WIDTH`] characters.
    pub text: String,
}

/// Token count plus previews of header-like tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Total number of tokens.
    pub total: usize,

    /// Previews for header-like tokens among the first [`PREVIEW_TOKEN_LIMIT`].
    pub previews: Vec<HeaderPreview>,
}

impl Report {
    /// Build a report from a token sequence.
    ///
    /// A token is previewed when, trimmed, it starts with the comment-open
    /// marker. This includes comments the tokenizer left inside content.
    #[must_use]
    pub fn from_tokens(tokens: &[Token<'_>]) -> Self {
        let previews = tokens
            .iter()
            .take(PREVIEW_TOKEN_LIMIT)
            .enumerate()
            .filter(|(_, token)| token.is_header_like())
            .map(|(index, token)| HeaderPreview {
                index,
                text: preview(token.text),
            })
            .collect();

        Self {
            total: tokens.len(),
            previews,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} sections", self.total)?;
        writeln!(f)?;
        for p in &self.previews {
            writeln!(f, "{}: {}", p.index, p.text)?;
        }
        Ok(())
    }
}

/// Trim a token and keep at most [`PREVIEW_WIDTH`] characters.
#[must_use]
pub fn preview(text: &str) -> String {
    text.trim().chars().take(PREVIEW_WIDTH).collect()
}
