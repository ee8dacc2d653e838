//! Header detection strategies.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{COMMENT_CLOSE, COMMENT_OPEN};

/// Comment block without any `*` between the markers.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*[^*]*\*/").expect("valid regex"));

/// Trait for header detection strategies.
///
/// Implementations only locate headers; the engine turns the spans into an
/// alternating token sequence, so every strategy round-trips.
pub trait TokenizeStrategy {
    /// Byte ranges of header comments, ascending and non-overlapping.
    fn header_spans(&self, text: &str) -> Vec<Range<usize>>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

/// Strategy that matches headers with a single regular expression.
///
/// A header is `/*`, any run of characters other than `*`, then `*/`.
/// Comments that contain a `*` (doc-style `/** */`, `/* a * b */`, nested
/// comments) are not headers and stay inside the surrounding content.
/// This is the default strategy.
pub struct RegexStrategy;

impl TokenizeStrategy for RegexStrategy {
    fn header_spans(&self, text: &str) -> Vec<Range<usize>> {
        HEADER_PATTERN.find_iter(text).map(|m| m.range()).collect()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

/// Strategy that scans comments explicitly.
///
/// Tracks comment and string state so that:
/// - a header runs from `/*` to the first `*/`, whatever it contains
/// - `/*` inside a quoted string is not a comment
/// - an unterminated `/*` leaves the rest of the input as content
pub struct LexerStrategy;

impl TokenizeStrategy for LexerStrategy {
    fn header_spans(&self, text: &str) -> Vec<Range<usize>> {
        let bytes = text.as_bytes();
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            if bytes[pos..].starts_with(COMMENT_OPEN.as_bytes()) {
                let body = pos + COMMENT_OPEN.len();
                let Some(close) = text[body..].find(COMMENT_CLOSE) else {
                    break;
                };
                let end = body + close + COMMENT_CLOSE.len();
                spans.push(pos..end);
                pos = end;
                continue;
            }

            pos = match bytes[pos] {
                quote @ (b'"' | b'\'') => skip_string(bytes, pos, quote),
                _ => pos + 1,
            };
        }

        spans
    }

    fn name(&self) -> &'static str {
        "lexer"
    }
}

/// Return the position just past a quoted string starting at `start`.
///
/// Strings end at the matching quote or, unterminated, at a line break.
fn skip_string(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'\n' => return pos,
            b if b == quote => return pos + 1,
            _ => pos += 1,
        }
    }
    bytes.len()
}
