//! Snippet formatting for search results.
//!
//! A snippet is a short window of a document's *analyzed* content tokens
//! around the first place a matched term occurs. Tokens are shown the way
//! the analyzer produced them (lowercase, stop words removed), not as they
//! appear in the raw content.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use gladius::analysis::StandardAnalyzer;
//! use gladius::highlight::{SnippetConfig, SnippetFormatter};
//! use gladius::query::MatchedTerm;
//!
//! let formatter = SnippetFormatter::new(
//!     SnippetConfig::default(),
//!     Arc::new(StandardAnalyzer::new().unwrap()),
//! );
//! let snippet = formatter.make_snippet("The cat sat on the mat", &[MatchedTerm::Term("mat".into())]);
//!
//! assert_eq!(snippet, "...cat sat mat...");
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::query::MatchedTerm;

/// Configuration for snippet windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    /// Tokens kept before the first match.
    pub before: usize,
    /// The window ends this many tokens after the first match (exclusive).
    pub after: usize,
    /// Tokens shown when no matched term occurs in the content.
    pub fallback_tokens: usize,
    /// Marker placed around a window and after the fallback.
    pub ellipsis: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        SnippetConfig {
            before: 8,
            after: 12,
            fallback_tokens: 30,
            ellipsis: "...".to_string(),
        }
    }
}

impl SnippetConfig {
    /// Create a new snippet configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of tokens before the match.
    pub fn with_before(mut self, before: usize) -> Self {
        self.before = before;
        self
    }

    /// Set the exclusive window end after the match.
    pub fn with_after(mut self, after: usize) -> Self {
        self.after = after;
        self
    }

    /// Set the fallback length.
    pub fn with_fallback_tokens(mut self, fallback_tokens: usize) -> Self {
        self.fallback_tokens = fallback_tokens;
        self
    }

    /// Set the ellipsis marker.
    pub fn with_ellipsis<S: Into<String>>(mut self, ellipsis: S) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }
}

/// Builds snippets with the analyzer the index was built with.
#[derive(Clone)]
pub struct SnippetFormatter {
    config: SnippetConfig,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for SnippetFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnippetFormatter")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl SnippetFormatter {
    pub fn new(config: SnippetConfig, analyzer: Arc<dyn Analyzer>) -> Self {
        SnippetFormatter { config, analyzer }
    }

    pub fn config(&self) -> &SnippetConfig {
        &self.config
    }

    /// Format a preview of `content` around the first matched term.
    ///
    /// The first token equal to a matched literal term, or to a matched
    /// phrase's first word, anchors the window. Without an anchor the first
    /// `fallback_tokens` tokens are shown instead. Empty content yields an
    /// empty string.
    pub fn make_snippet(&self, content: &str, matched: &[MatchedTerm]) -> String {
        if content.is_empty() {
            return String::new();
        }

        let tokens = self.analyzer.terms(content);
        let ellipsis = &self.config.ellipsis;

        match find_anchor(&tokens, matched) {
            Some(anchor) => {
                let start = anchor.saturating_sub(self.config.before);
                let end = anchor.saturating_add(self.config.after).min(tokens.len());
                format!("{ellipsis}{}{ellipsis}", tokens[start..end].join(" "))
            }
            None => {
                let end = self.config.fallback_tokens.min(tokens.len());
                format!("{}{ellipsis}", tokens[..end].join(" "))
            }
        }
    }
}

/// Index of the first token that starts any matched term.
fn find_anchor(tokens: &[String], matched: &[MatchedTerm]) -> Option<usize> {
    tokens.iter().position(|token| {
        matched
            .iter()
            .filter_map(MatchedTerm::first_word)
            .any(|word| word == token.as_str())
    })
}
