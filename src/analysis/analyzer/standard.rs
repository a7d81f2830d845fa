//! Standard analyzer used by the index, the query compiler and snippets.
//!
//! # Pipeline
//!
//! 1. LowercaseCharFilter
//! 2. RegexTokenizer (maximal runs of ASCII letters and digits)
//! 3. StopFilter (23 common English stop words, or a configured list)
//! 4. StemFilter (identity unless stemming is enabled)
//!
//! # Examples
//!
//! ```
//! use gladius::analysis::analyzer::{Analyzer, StandardAnalyzer};
//! use gladius::config::AnalysisConfig;
//!
//! let plain = StandardAnalyzer::new().unwrap();
//! assert_eq!(plain.terms("Running cats"), vec!["running", "cats"]);
//!
//! let stemming = StandardAnalyzer::from_config(&AnalysisConfig::default().with_stemming(true)).unwrap();
//! assert_eq!(stemming.terms("Running cats"), vec!["run", "cat"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::LowercaseCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// The analyzer every component of the engine shares.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
    stemming: bool,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings (no stemming).
    pub fn new() -> Result<Self> {
        Self::from_config(&AnalysisConfig::default())
    }

    /// Create a standard analyzer from an analysis configuration.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let stop_filter = match &config.stop_words {
            Some(words) => StopFilter::from_words(words.iter().map(|w| w.to_lowercase())),
            None => StopFilter::new(),
        };
        let stem_filter = if config.stemming {
            StemFilter::new()
        } else {
            StemFilter::identity()
        };

        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(stem_filter))
            .with_name("standard");

        Ok(StandardAnalyzer {
            inner,
            stemming: config.stemming,
        })
    }

    /// Whether this analyzer stems its tokens.
    pub fn is_stemming(&self) -> bool {
        self.stemming
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .field("stemming", &self.stemming)
            .finish()
    }
}
