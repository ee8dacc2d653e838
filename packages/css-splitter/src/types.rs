//! Core data types for the splitter.
//!
//! Tokens and sections borrow from the stylesheet text; nothing is copied
//! until a section is rendered for output.

use std::fmt;

use crate::config::is_header_like;

/// Kind of a token produced by tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Literal stylesheet text between headers (possibly empty).
    Content,

    /// A comment block recognised as a section header.
    Header,
}

/// A contiguous slice of the stylesheet.
///
/// Concatenating every token of a tokenization in order yields the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Whether this is content or a header.
    pub kind: TokenKind,

    /// The exact source text of the token.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Create a content token.
    #[must_use]
    pub fn content(text: &'a str) -> Self {
        Self {
            kind: TokenKind::Content,
            text,
        }
    }

    /// Create a header token.
    #[must_use]
    pub fn header(text: &'a str) -> Self {
        Self {
            kind: TokenKind::Header,
            text,
        }
    }

    /// Whether the tokenizer recognised this token as a header.
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.kind == TokenKind::Header
    }

    /// Whether the token starts with a comment marker once trimmed.
    ///
    /// This is looser than [`Token::is_header`]: content holding a comment
    /// the tokenizer rejected (e.g. one containing `*`) also qualifies.
    #[must_use]
    pub fn is_header_like(&self) -> bool {
        is_header_like(self.text)
    }

    /// The token text.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// A header and the content that follows it, up to the next header.
///
/// Content before the first header forms a section without a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Header token text, `None` for the leading section.
    pub header: Option<&'a str>,

    /// Token texts in input order, header included.
    pub parts: Vec<&'a str>,
}

impl<'a> Section<'a> {
    /// Create a section starting with the given header.
    #[must_use]
    pub fn new(header: Option<&'a str>) -> Self {
        Self {
            header,
            parts: header.into_iter().collect(),
        }
    }

    /// Append a token text to this section.
    pub fn push(&mut self, text: &'a str) {
        self.parts.push(text);
    }

    /// Total length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.iter().map(|p| p.len()).sum()
    }

    /// Whether the section holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the section text.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_constructors() {
        let content = Token::content("a ");
        assert_eq!(content.kind, TokenKind::Content);
        assert!(!content.is_header());

        let header = Token::header("/* Footer */");
        assert_eq!(header.kind, TokenKind::Header);
        assert!(header.is_header());
        assert_eq!(header.as_str(), "/* Footer */");
    }

    #[test]
    fn test_token_is_header_like() {
        assert!(Token::header("/* Modal */").is_header_like());
        // Rejected comment left in content still looks like a header
        assert!(Token::content("\n/* a * b */ x").is_header_like());
        assert!(!Token::content(" b ").is_header_like());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::content(" c").to_string(), " c");
    }

    #[test]
    fn test_section_text() {
        let mut section = Section::new(Some("/* Footer */"));
        section.push("\nfooter { color: red; }\n");

        assert_eq!(section.header, Some("/* Footer */"));
        assert_eq!(section.text(), "/* Footer */\nfooter { color: red; }\n");
        assert_eq!(section.len(), section.text().len());
        assert!(!section.is_empty());
    }

    #[test]
    fn test_section_without_header() {
        let mut section = Section::new(None);
        assert!(section.is_empty());

        section.push("");
        assert!(section.is_empty());

        section.push("@charset \"utf-8\";\n");
        assert_eq!(section.parts.len(), 2);
        assert!(!section.is_empty());
    }
}
