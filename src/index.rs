//! In-memory positional inverted index.
//!
//! The index owns every document added to it along with, for each term, the
//! positions at which it occurs in each document's token stream. It only
//! grows: there is no update or delete, and a document is tokenized exactly
//! once, when it is added.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use gladius::analysis::StandardAnalyzer;
//! use gladius::document::Document;
//! use gladius::index::InvertedIndex;
//!
//! let mut index = InvertedIndex::new(Arc::new(StandardAnalyzer::new().unwrap()));
//! index.add_document(Document::new(1, "", "", "the small cat sat"));
//!
//! assert_eq!(index.doc_count(), 1);
//! assert_eq!(index.doc_len(1), 3);
//! assert_eq!(index.posting("cat").unwrap().positions(1), &[1]);
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::document::{DocId, Document};

pub mod posting;

pub use posting::Posting;

/// An ordered set of document IDs, the value type of boolean evaluation.
pub type DocSet = BTreeSet<DocId>;

/// Summary counts over the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of distinct documents.
    pub documents: usize,
    /// Number of distinct terms.
    pub terms: usize,
    /// Total number of indexed tokens across all documents.
    pub tokens: usize,
}

/// Positional inverted index over an in-memory document collection.
pub struct InvertedIndex {
    analyzer: Arc<dyn Analyzer>,
    terms: AHashMap<String, Posting>,
    docs: AHashMap<DocId, Document>,
    doc_token_counts: AHashMap<DocId, usize>,
}

impl std::fmt::Debug for InvertedIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvertedIndex")
            .field("analyzer", &self.analyzer.name())
            .field("documents", &self.docs.len())
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl InvertedIndex {
    /// Create an empty index that tokenizes with the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        InvertedIndex {
            analyzer,
            terms: AHashMap::new(),
            docs: AHashMap::new(),
            doc_token_counts: AHashMap::new(),
        }
    }

    /// Add a document to the index.
    ///
    /// Title and content are tokenized as one stream; the i-th surviving
    /// token is recorded at position i. Each document ID must be added only
    /// once: adding an ID again replaces the stored document and token count
    /// but appends a second run of positions to the existing postings.
    pub fn add_document(&mut self, doc: Document) {
        let doc_id = doc.id;
        if self.docs.contains_key(&doc_id) {
            warn!("Document {doc_id} added more than once; its positions are now duplicated");
        }

        let tokens = self.analyzer.terms(&doc.indexed_text());
        self.doc_token_counts.insert(doc_id, tokens.len());
        for (position, term) in tokens.into_iter().enumerate() {
            self.terms
                .entry(term)
                .or_default()
                .add_position(doc_id, position);
        }
        self.docs.insert(doc_id, doc);
    }

    /// Add several documents in order.
    pub fn add_documents<I>(&mut self, docs: I)
    where
        I: IntoIterator<Item = Document>,
    {
        for doc in docs {
            self.add_document(doc);
        }
        debug!(
            "Index now holds {} documents and {} terms",
            self.docs.len(),
            self.terms.len()
        );
    }

    /// The analyzer used to tokenize documents.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Number of distinct documents (N).
    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// Get a stored document.
    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.docs.get(&doc_id)
    }

    /// Number of tokens indexed for a document; 0 if unknown.
    pub fn doc_len(&self, doc_id: DocId) -> usize {
        self.doc_token_counts.get(&doc_id).copied().unwrap_or(0)
    }

    /// Posting of a term, if the term was ever indexed.
    pub fn posting(&self, term: &str) -> Option<&Posting> {
        self.terms.get(term)
    }

    /// Whether the term occurs anywhere in the index.
    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of documents containing the term.
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.posting(term).map_or(0, Posting::doc_frequency)
    }

    /// Occurrences of the term in one document.
    pub fn term_frequency(&self, term: &str, doc_id: DocId) -> usize {
        self.posting(term).map_or(0, |p| p.term_frequency(doc_id))
    }

    /// Documents containing the term; empty for unseen terms.
    pub fn docs_with_term(&self, term: &str) -> DocSet {
        self.posting(term)
            .map(|p| p.doc_ids().collect())
            .unwrap_or_default()
    }

    /// Every indexed document ID.
    pub fn all_doc_ids(&self) -> DocSet {
        self.docs.keys().copied().collect()
    }

    /// Summary counts.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.docs.len(),
            terms: self.terms.len(),
            tokens: self.doc_token_counts.values().sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StandardAnalyzer;

    fn index_with(docs: Vec<Document>) -> InvertedIndex {
        let mut index = InvertedIndex::new(Arc::new(StandardAnalyzer::new().unwrap()));
        index.add_documents(docs);
        index
    }

    #[test]
    fn test_positions_span_title_and_content() {
        let index = index_with(vec![Document::new(1, "Small Cat", "", "the cat sat")]);

        // Stream: small(0) cat(1) cat(2) sat(3); "the" is dropped before numbering
        assert_eq!(index.posting("cat").unwrap().positions(1), &[1, 2]);
        assert_eq!(index.posting("sat").unwrap().positions(1), &[3]);
        assert_eq!(index.doc_len(1), 4);
        assert!(!index.contains_term("the"));
    }

    #[test]
    fn test_doc_count_tracks_distinct_ids() {
        let index = index_with(vec![
            Document::new(1, "", "", "cats"),
            Document::new(2, "", "", "dogs"),
            Document::new(3, "", "", ""),
        ]);

        assert_eq!(index.doc_count(), 3);
        assert_eq!(index.doc_len(3), 0);
        assert_eq!(index.all_doc_ids(), DocSet::from([1, 2, 3]));
    }

    #[test]
    fn test_term_statistics() {
        let index = index_with(vec![
            Document::new(1, "", "", "cats cats pets"),
            Document::new(2, "", "", "dogs pets"),
        ]);

        assert_eq!(index.doc_frequency("pets"), 2);
        assert_eq!(index.doc_frequency("cats"), 1);
        assert_eq!(index.doc_frequency("birds"), 0);
        assert_eq!(index.term_frequency("cats", 1), 2);
        assert_eq!(index.term_frequency("cats", 2), 0);
        assert_eq!(index.docs_with_term("pets"), DocSet::from([1, 2]));
        assert!(index.docs_with_term("birds").is_empty());
    }

    #[test]
    fn test_readding_appends_positions() {
        let mut index = index_with(vec![Document::new(1, "", "", "cat")]);
        index.add_document(Document::new(1, "", "", "cat"));

        assert_eq!(index.doc_count(), 1);
        assert_eq!(index.posting("cat").unwrap().positions(1), &[0, 0]);
        assert_eq!(index.doc_len(1), 1);
    }

    #[test]
    fn test_stats() {
        let index = index_with(vec![
            Document::new(1, "", "", "cats are independent pets"),
            Document::new(2, "", "", "dogs are loyal pets"),
        ]);

        assert_eq!(
            index.stats(),
            IndexStats {
                documents: 2,
                terms: 5,
                tokens: 6,
            }
        );
    }
}
