//! Engine configuration.
//!
//! Every tunable of the engine lives in an explicit value passed in at
//! construction time; there is no process-wide state. Configurations can be
//! built in code or loaded from a JSON file where every field is optional:
//!
//! ```json
//! {
//!   "analysis": { "stemming": true },
//!   "scoring": { "phrase_bonus": 2.0 },
//!   "snippet": { "before": 8, "after": 12 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GladiusError, Result};
use crate::highlight::SnippetConfig;

/// Configuration of the shared analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Apply English stemming to every token.
    pub stemming: bool,
    /// Replace the default stop word list.
    pub stop_words: Option<Vec<String>>,
}

impl AnalysisConfig {
    /// Enable or disable stemming.
    pub fn with_stemming(mut self, stemming: bool) -> Self {
        self.stemming = stemming;
        self
    }

    /// Use a custom stop word list.
    pub fn with_stop_words(mut self, stop_words: Vec<String>) -> Self {
        self.stop_words = Some(stop_words);
        self
    }
}

/// Configuration of result scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Fixed additive bonus for every matched phrase.
    pub phrase_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig { phrase_bonus: 2.0 }
    }
}

impl ScoringConfig {
    /// Set the phrase bonus.
    pub fn with_phrase_bonus(mut self, phrase_bonus: f64) -> Self {
        self.phrase_bonus = phrase_bonus;
        self
    }
}

/// Top-level configuration for a [`SearchEngine`](crate::search::SearchEngine).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub analysis: AnalysisConfig,
    pub scoring: ScoringConfig,
    pub snippet: SnippetConfig,
}

impl EngineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let bonus = self.scoring.phrase_bonus;
        if !bonus.is_finite() || bonus < 0.0 {
            return Err(GladiusError::config(format!(
                "phrase_bonus must be a non-negative finite number, got {bonus}"
            )));
        }
        if self.snippet.fallback_tokens == 0 {
            return Err(GladiusError::config(
                "snippet.fallback_tokens must be at least 1",
            ));
        }
        Ok(())
    }

    /// Replace the analysis configuration.
    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = analysis;
        self
    }

    /// Replace the scoring configuration.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Replace the snippet configuration.
    pub fn with_snippet(mut self, snippet: SnippetConfig) -> Self {
        self.snippet = snippet;
        self
    }

    /// Shorthand for toggling stemming.
    pub fn with_stemming(mut self, stemming: bool) -> Self {
        self.analysis.stemming = stemming;
        self
    }
}
