//! Porter (Snowball English) stemmer.
//!
//! Backed by `rust-stemmers`, so index-time and query-time stemming agree as
//! long as both sides are built from the same analysis configuration.
//!
//! # Examples
//!
//! ```
//! use gladius::analysis::token_filter::stem::Stemmer;
//! use gladius::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("cats"), "cat");
//! ```

use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

use crate::analysis::token_filter::stem::Stemmer;

/// English stemmer using the Snowball Porter2 algorithm.
pub struct PorterStemmer {
    inner: SnowballStemmer,
}

impl std::fmt::Debug for PorterStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PorterStemmer")
            .field("algorithm", &"english")
            .finish()
    }
}

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
