//! Scoring implementations for ranking search results.

use std::fmt::Debug;

use crate::config::ScoringConfig;
use crate::document::DocId;
use crate::index::InvertedIndex;
use crate::query::evaluator::MatchedTerm;

/// Trait for document scorers.
///
/// A scorer sees only the operands matched in one document and the index
/// statistics; it never re-evaluates the query.
pub trait Scorer: Send + Sync + Debug {
    /// Score one document from its matched terms and phrases.
    fn score(&self, index: &InvertedIndex, doc_id: DocId, matched: &[MatchedTerm]) -> f64;

    /// Get the name of this scorer.
    fn name(&self) -> &'static str;
}

/// Length-normalized TF-IDF with a fixed bonus per matched phrase.
///
/// A literal term contributes `tf / doc_len * ln(1 + N / df)`; a phrase
/// contributes the bonus regardless of its length or rarity. There is no
/// cross-document normalization.
#[derive(Debug, Clone)]
pub struct TfIdfScorer {
    phrase_bonus: f64,
}

impl Default for TfIdfScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfScorer {
    /// Create a scorer with the default phrase bonus of 2.0.
    pub fn new() -> Self {
        Self::from_config(&ScoringConfig::default())
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        TfIdfScorer {
            phrase_bonus: config.phrase_bonus,
        }
    }

    /// Set the phrase bonus.
    pub fn with_phrase_bonus(mut self, phrase_bonus: f64) -> Self {
        self.phrase_bonus = phrase_bonus;
        self
    }

    /// Get the phrase bonus.
    pub fn phrase_bonus(&self) -> f64 {
        self.phrase_bonus
    }

    /// Weight of one literal term in one document; 0 when the term is unseen
    /// or the document has no tokens.
    pub fn term_weight(&self, index: &InvertedIndex, term: &str, doc_id: DocId) -> f64 {
        let df = index.doc_frequency(term);
        let doc_len = index.doc_len(doc_id);
        if df == 0 || doc_len == 0 {
            return 0.0;
        }

        let tf = index.term_frequency(term, doc_id) as f64 / doc_len as f64;
        let idf = (1.0 + index.doc_count() as f64 / df as f64).ln();
        tf * idf
    }
}

impl Scorer for TfIdfScorer {
    fn score(&self, index: &InvertedIndex, doc_id: DocId, matched: &[MatchedTerm]) -> f64 {
        matched
            .iter()
            .map(|m| match m {
                MatchedTerm::Term(term) => self.term_weight(index, term, doc_id),
                MatchedTerm::Phrase(_) => self.phrase_bonus,
            })
            .sum()
    }

    fn name(&self) -> &'static str {
        "tf_idf"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::StandardAnalyzer;
    use crate::document::Document;

    fn index_with(docs: Vec<Document>) -> InvertedIndex {
        let mut index = InvertedIndex::new(Arc::new(StandardAnalyzer::new().unwrap()));
        index.add_documents(docs);
        index
    }

    fn term(s: &str) -> MatchedTerm {
        MatchedTerm::Term(s.to_string())
    }

    #[test]
    fn test_term_weight() {
        let index = index_with(vec![
            Document::new(1, "", "", "cats cats pets dogs"),
            Document::new(2, "", "", "dogs"),
        ]);
        let scorer = TfIdfScorer::new();

        // tf = 2/4, idf = ln(1 + 2/1)
        let expected = 0.5 * 3.0_f64.ln();
        assert!((scorer.term_weight(&index, "cats", 1) - expected).abs() < 1e-12);

        // Present everywhere: idf = ln(2)
        let expected = 1.0 * 2.0_f64.ln();
        assert!((scorer.term_weight(&index, "dogs", 2) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unseen_term_and_empty_doc_score_zero() {
        let index = index_with(vec![
            Document::new(1, "", "", "cats"),
            Document::new(2, "", "", "the"),
        ]);
        let scorer = TfIdfScorer::new();

        assert_eq!(scorer.term_weight(&index, "birds", 1), 0.0);
        assert_eq!(scorer.term_weight(&index, "cats", 2), 0.0);
        assert_eq!(scorer.score(&index, 2, &[term("cats")]), 0.0);
    }

    #[test]
    fn test_phrase_bonus_is_added() {
        let index = index_with(vec![Document::new(1, "", "", "small cats")]);
        let phrase = MatchedTerm::Phrase(vec!["small".into(), "cats".into()]);

        let scorer = TfIdfScorer::new();
        let base = scorer.score(&index, 1, &[term("cats")]);
        let with_phrase = scorer.score(&index, 1, &[term("cats"), phrase.clone()]);
        assert!((with_phrase - base - 2.0).abs() < 1e-12);

        let scorer = TfIdfScorer::new().with_phrase_bonus(0.5);
        assert_eq!(scorer.score(&index, 1, &[phrase]), 0.5);
    }

    #[test]
    fn test_score_sums_contributions() {
        let index = index_with(vec![
            Document::new(1, "", "", "cats pets"),
            Document::new(2, "", "", "dogs pets"),
        ]);
        let scorer = TfIdfScorer::new();

        let total = scorer.score(&index, 1, &[term("cats"), term("pets")]);
        let parts = scorer.term_weight(&index, "cats", 1) + scorer.term_weight(&index, "pets", 1);
        assert!((total - parts).abs() < 1e-12);
        assert_eq!(scorer.score(&index, 1, &[]), 0.0);
    }

    #[test]
    fn test_more_occurrences_never_lower_the_weight() {
        // Same length and corpus size, growing frequency of "cats" in doc 1
        let contents = [
            "cats dogs birds fish",
            "cats cats birds fish",
            "cats cats cats fish",
            "cats cats cats cats",
        ];
        let mut previous = 0.0;
        for content in contents {
            let index = index_with(vec![
                Document::new(1, "", "", content),
                Document::new(2, "", "", "cats mice"),
            ]);
            let weight = TfIdfScorer::new().term_weight(&index, "cats", 1);

            assert!(weight >= previous);
            previous = weight;
        }
    }

    #[test]
    fn test_scores_are_non_negative() {
        let index = index_with(vec![
            Document::new(1, "", "", "cats"),
            Document::new(2, "", "", "cats"),
        ]);
        let score = TfIdfScorer::new().score(&index, 1, &[term("cats")]);

        assert!(score > 0.0);
        assert_eq!(TfIdfScorer::new().name(), "tf_idf");
    }
}
