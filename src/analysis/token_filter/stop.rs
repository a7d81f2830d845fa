//! Stop filter implementation.
//!
//! Removes common words that carry no retrieval value. The default list is a
//! compact English set; custom lists can be supplied through configuration.
//!
//! # Examples
//!
//! ```
//! use gladius::analysis::token_filter::Filter;
//! use gladius::analysis::token_filter::stop::StopFilter;
//! use gladius::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("small", 1),
//!     Token::new("cat", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "small");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;

/// Default English stop words list.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "is", "and", "a", "an", "of", "to", "in", "for", "on", "with", "by", "that", "this",
    "it", "as", "are", "was", "at", "from", "be", "has", "have",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| DEFAULT_STOP_WORDS.iter().map(|&s| s.to_string()).collect());

/// A filter that removes stop words from the token stream.
///
/// Matching is exact, so the filter must run after lowercasing.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with [`DEFAULT_STOP_WORDS`].
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use gladius::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let stop_words = Arc::clone(&self.stop_words);
        let filtered: Vec<Token> = tokens
            .filter(|token| !stop_words.contains(&token.text))
            .collect();

        Box::new(filtered.into_iter())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stop_words() {
        let filter = StopFilter::new();

        assert_eq!(filter.len(), 23);
        for word in ["the", "is", "and", "have", "from"] {
            assert!(filter.is_stop_word(word), "{word} should be a stop word");
        }
        // Common words outside the compact list are kept
        assert!(!filter.is_stop_word("not"));
        assert!(!filter.is_stop_word("or"));
    }

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let filter = StopFilter::new();
        let tokens = vec![Token::new("The", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
