//! Stylesheet splitting at comment headers.
//!
//! Tokenization is lossless: the tokens of any input concatenate back to
//! that input. Header detection is pluggable through [`TokenizeStrategy`].

mod engine;
mod strategy;

pub use engine::{group_sections, tokenize, SplitEngine};
pub use strategy::{LexerStrategy, RegexStrategy, TokenizeStrategy};
