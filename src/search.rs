//! High-level search engine that combines indexing and searching.
//!
//! [`SearchEngine`] owns the index together with the compiler, scorer and
//! snippet formatter, all built around one shared analyzer so that documents,
//! queries and snippets are tokenized identically.
//!
//! # Examples
//!
//! ```
//! use gladius::config::EngineConfig;
//! use gladius::document::Document;
//! use gladius::search::SearchEngine;
//!
//! let mut engine = SearchEngine::new(EngineConfig::default()).unwrap();
//! engine.add_documents(vec![
//!     Document::new(1, "Cats", "2024-01-01", "small cats are independent pets"),
//!     Document::new(2, "Dogs", "2024-01-02", "dogs are loyal pets"),
//! ]);
//!
//! let results = engine.search("pets AND NOT dogs");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].doc_id, 1);
//! ```

use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::{Analyzer, StandardAnalyzer};
use crate::config::EngineConfig;
use crate::document::{DocId, Document};
use crate::error::Result;
use crate::highlight::SnippetFormatter;
use crate::index::{IndexStats, InvertedIndex};
use crate::query::{
    CompiledQuery, Diagnostic, Evaluator, MatchedTerm, QueryCompiler, RpnToken, Scorer,
    TfIdfScorer,
};

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    /// Non-negative relevance score.
    pub score: f64,
    /// Query operands found in the document, in query order.
    pub matched_terms: Vec<MatchedTerm>,
}

/// Results of a search together with what the engine made of the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as given.
    pub query: String,
    /// The compiled RPN sequence.
    pub rpn: Vec<RpnToken>,
    /// Results by descending score, ties by ascending document ID.
    pub results: Vec<SearchResult>,
    /// Compile and evaluation diagnostics, in that order.
    pub diagnostics: Vec<Diagnostic>,
}

/// In-memory boolean search engine with TF-IDF ranking.
pub struct SearchEngine {
    config: EngineConfig,
    index: InvertedIndex,
    compiler: QueryCompiler,
    scorer: Box<dyn Scorer>,
    snippets: SnippetFormatter,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("index", &self.index)
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl SearchEngine {
    /// Create an empty engine with a [`StandardAnalyzer`] built from the
    /// configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = Arc::new(StandardAnalyzer::from_config(&config.analysis)?);
        Ok(Self::with_analyzer(config, analyzer))
    }

    /// Create an empty engine around a custom analyzer.
    ///
    /// The analyzer is shared by indexing, query compilation and snippets;
    /// `config.analysis` is not consulted.
    pub fn with_analyzer(config: EngineConfig, analyzer: Arc<dyn Analyzer>) -> Self {
        SearchEngine {
            index: InvertedIndex::new(analyzer.clone()),
            compiler: QueryCompiler::new(analyzer.clone()),
            scorer: Box::new(TfIdfScorer::from_config(&config.scoring)),
            snippets: SnippetFormatter::new(config.snippet.clone(), analyzer),
            config,
        }
    }

    /// Replace the scorer.
    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Add a document. Each ID must be added only once.
    pub fn add_document(&mut self, doc: Document) {
        self.index.add_document(doc);
    }

    /// Add several documents.
    pub fn add_documents<I>(&mut self, docs: I)
    where
        I: IntoIterator<Item = Document>,
    {
        self.index.add_documents(docs);
    }

    /// The underlying index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Get a stored document.
    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.index.document(doc_id)
    }

    /// Summary counts of the index.
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Compile a query without running it.
    pub fn compile(&self, query: &str) -> CompiledQuery {
        self.compiler.compile(query)
    }

    /// Run a query and return the ranked results.
    ///
    /// Never fails: a malformed query degrades to a best-effort result and an
    /// empty query returns no results.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.search_with_diagnostics(query).results
    }

    /// Run a query and also return its RPN and diagnostics.
    pub fn search_with_diagnostics(&self, query: &str) -> SearchResponse {
        let start = Instant::now();
        let compiled = self.compiler.compile(query);
        debug!("Query {query:?} compiled to [{compiled}]");

        let evaluator = Evaluator::new(&self.index);
        let evaluation = evaluator.evaluate(&compiled.tokens);
        debug!("{} candidate documents", evaluation.docs.len());

        let mut results: Vec<SearchResult> = evaluation
            .docs
            .iter()
            .map(|&doc_id| {
                let matched_terms = evaluator.matched_terms(doc_id, &compiled.tokens);
                let score = self.scorer.score(&self.index, doc_id, &matched_terms);
                SearchResult {
                    doc_id,
                    score,
                    matched_terms,
                }
            })
            .collect();
        results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });

        let mut diagnostics = compiled.diagnostics;
        diagnostics.extend(evaluation.diagnostics);
        for diagnostic in &diagnostics {
            warn!("Query {query:?}: {diagnostic}");
        }

        debug!(
            "Query {query:?} returned {} results in {:?}",
            results.len(),
            start.elapsed()
        );

        SearchResponse {
            query: query.to_string(),
            rpn: compiled.tokens,
            results,
            diagnostics,
        }
    }

    /// Snippet of a result's document content around its matched terms;
    /// empty if the document is unknown.
    pub fn snippet(&self, result: &SearchResult) -> String {
        self.document(result.doc_id)
            .map(|doc| self.snippets.make_snippet(&doc.content, &result.matched_terms))
            .unwrap_or_default()
    }
}
