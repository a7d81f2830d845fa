//! Positional posting lists.

use ahash::AHashMap;

use crate::document::DocId;

/// Per-term record of which documents contain the term and where.
///
/// Positions are appended in the order tokens are read, so for a document
/// indexed once they are strictly increasing. A position list is never
/// empty: a document only appears once it has a position.
#[derive(Debug, Clone, Default)]
pub struct Posting {
    positions: AHashMap<DocId, Vec<usize>>,
}

impl Posting {
    /// Record one occurrence of the term at `position` in `doc_id`.
    pub fn add_position(&mut self, doc_id: DocId, position: usize) {
        self.positions.entry(doc_id).or_default().push(position);
    }

    /// Positions of the term in a document; empty if the document lacks it.
    pub fn positions(&self, doc_id: DocId) -> &[usize] {
        self.positions
            .get(&doc_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the document contains the term.
    pub fn contains(&self, doc_id: DocId) -> bool {
        self.positions.contains_key(&doc_id)
    }

    /// Number of occurrences of the term in the document.
    pub fn term_frequency(&self, doc_id: DocId) -> usize {
        self.positions(doc_id).len()
    }

    /// Number of documents containing the term.
    pub fn doc_frequency(&self) -> usize {
        self.positions.len()
    }

    /// Iterate over the documents of this posting, in no particular order.
    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.positions.keys().copied()
    }

    /// Documents of this posting in ascending ID order.
    pub fn sorted_doc_ids(&self) -> Vec<DocId> {
        let mut ids: Vec<DocId> = self.doc_ids().collect();
        ids.sort_unstable();
        ids
    }
}
