//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first token-producing step of the analysis pipeline,
//! splitting (already char-filtered) text into [`Token`](crate::analysis::token::Token)s.
//!
//! # Examples
//!
//! ```
//! use gladius::analysis::tokenizer::Tokenizer;
//! use gladius::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("small-cat sat").collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;

pub mod regex;

pub use self::regex::RegexTokenizer;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization itself cannot fail; tokenizers that need fallible setup
/// (such as compiling a pattern) fail at construction instead.
pub trait Tokenizer: Send + Sync {
    /// Split the text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
