//! # Gladius
//!
//! An in-memory boolean and ranked full-text search engine.
//!
//! ## Features
//!
//! - Boolean queries with `AND`, `OR`, `NOT`, parentheses and quoted phrases
//! - Positional inverted index with exact phrase adjacency
//! - TF-IDF ranking with a phrase bonus
//! - Configurable analysis (stop words, optional English stemming)
//! - Snippets around the first match
//! - CSV document loading and a small CLI
//!
//! ## Example
//!
//! ```
//! use gladius::prelude::*;
//!
//! let mut engine = SearchEngine::new(EngineConfig::default()).unwrap();
//! engine.add_document(Document::new(1, "Pets", "2024-01-01", "the small cat sat"));
//!
//! assert_eq!(engine.search("\"small cat\"").len(), 1);
//! assert!(engine.search("\"cat small\"").is_empty());
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod highlight;
pub mod index;
pub mod query;
pub mod search;

pub mod prelude {
    pub use crate::analysis::{Analyzer, StandardAnalyzer};
    pub use crate::config::{AnalysisConfig, EngineConfig, ScoringConfig};
    pub use crate::document::csv::CsvDocumentLoader;
    pub use crate::document::{DocId, Document};
    pub use crate::error::{GladiusError, Result};
    pub use crate::highlight::{SnippetConfig, SnippetFormatter};
    pub use crate::index::{DocSet, InvertedIndex};
    pub use crate::query::{CompiledQuery, Diagnostic, MatchedTerm, QueryCompiler, RpnToken};
    pub use crate::search::{SearchEngine, SearchResponse, SearchResult};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
