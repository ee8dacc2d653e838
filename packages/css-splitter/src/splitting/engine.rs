//! Split engine that turns header spans into tokens and sections.

use super::strategy::{RegexStrategy, TokenizeStrategy};
use crate::types::{Section, Token};

/// Engine for splitting a stylesheet at its comment headers.
///
/// The token sequence always alternates content and header, starting and
/// ending with a (possibly empty) content token:
///
/// ```text
/// "a /* A */ b"   -> ["a ", "/* A */", " b"]
/// "/* A *//* B */" -> ["", "/* A */", "", "/* B */", ""]
/// ""              -> [""]
/// ```
pub struct SplitEngine<S: TokenizeStrategy> {
    strategy: S,
}

impl<S: TokenizeStrategy> SplitEngine<S> {
    /// Create a new split engine.
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Split text into alternating content and header tokens.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let spans = self.strategy.header_spans(text);
        let mut tokens = Vec::with_capacity(spans.len() * 2 + 1);
        let mut cursor = 0;

        for span in spans {
            tokens.push(Token::content(&text[cursor..span.start]));
            tokens.push(Token::header(&text[span.start..span.end]));
            cursor = span.end;
        }
        tokens.push(Token::content(&text[cursor..]));

        tracing::debug!(
            strategy = self.strategy.name(),
            tokens = tokens.len(),
            "Tokenized stylesheet"
        );

        tokens
    }

    /// Split text into sections, one per header plus a leading section.
    pub fn sections<'a>(&self, text: &'a str) -> Vec<Section<'a>> {
        group_sections(&self.tokenize(text))
    }
}

impl Default for SplitEngine<RegexStrategy> {
    fn default() -> Self {
        Self::new(RegexStrategy)
    }
}

/// Tokenize with the default regex strategy.
///
/// # Examples
/// ```
/// use css_splitter::splitting::tokenize;
///
/// let tokens = tokenize("a /* Base Reset */ b");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].text, "/* Base Reset */");
/// ```
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    SplitEngine::<RegexStrategy>::default().tokenize(text)
}

/// Group tokens into sections.
///
/// Every header token opens a new section. Tokens before the first header
/// go into a leading section without a header, which is always present
/// (it may be empty).
pub fn group_sections<'a>(tokens: &[Token<'a>]) -> Vec<Section<'a>> {
    let mut sections = vec![Section::new(None)];

    for token in tokens {
        if token.is_header() {
            sections.push(Section::new(Some(token.text)));
        } else if let Some(current) = sections.last_mut() {
            current.push(token.text);
        }
    }

    sections
}
