//! CSS Splitter - Split a monolithic stylesheet at its comment headers.
//!
//! This crate tokenizes a stylesheet into content and comment-header tokens,
//! classifies headers against an ordered mapping table, and reports or
//! writes the resulting per-section files.
//!
//! # Example
//!
//! ```
//! use css_splitter::mapping::{create_default_mapping, Classification};
//! use css_splitter::splitting::tokenize;
//!
//! let tokens = tokenize("a /* Base Reset */ b /* Container */ c");
//! assert_eq!(tokens.len(), 5);
//!
//! let table = create_default_mapping();
//! assert_eq!(
//!     table.classify(tokens[1].text),
//!     Classification::Destination("css/base/reset.css")
//! );
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Tokens and sections
//! - [`error`]: Error types and Result alias
//! - [`content`]: Stylesheet reading
//! - [`splitting`]: Tokenization strategies and section grouping
//! - [`mapping`]: Header classification table
//! - [`report`]: Diagnostic summary
//! - [`writer`]: Split planning and file output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod mapping;
pub mod report;
pub mod splitting;
pub mod types;
pub mod writer;

// Re-export commonly used items
pub use content::read_stylesheet;
pub use error::{Result, SplitterError};
pub use mapping::{create_default_mapping, Classification, MappingTable};
pub use report::Report;
pub use splitting::tokenize;
pub use types::{Section, Token, TokenKind};
pub use writer::SplitPlan;
