//! Analyzers combine a char filter, a tokenizer and token filters into the
//! word-normalization capability shared by indexing, query compilation,
//! phrase matching and snippet formatting.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Terms
//! ```
//!
//! # Examples
//!
//! ```
//! use gladius::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! assert_eq!(analyzer.terms("The small Cat sat"), vec!["small", "cat", "sat"]);
//! ```

use crate::analysis::token::TokenStream;

pub mod pipeline;
pub mod standard;

pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;

/// Trait for analyzers that convert text into normalized tokens.
///
/// Analysis is deterministic: the same analyzer applied to the same text
/// always yields the same token sequence.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and keep only the token texts, in stream order.
    fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }
}
