//! Text analysis module for Gladius.
//!
//! Turns raw text into the ordered sequence of normalized word tokens that
//! the index stores and queries are matched against: lowercase, split on
//! maximal runs of ASCII letters and digits, drop stop words, and optionally
//! stem.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
