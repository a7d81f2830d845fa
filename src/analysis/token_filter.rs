//! Token filter implementations for token transformation.

use crate::analysis::token::TokenStream;

pub mod stem;
pub mod stop;

pub use stem::{IdentityStemmer, PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}
