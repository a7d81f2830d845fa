//! Boolean evaluation of compiled queries over the inverted index.
//!
//! The evaluator is a single-pass stack machine over [`DocSet`]s. Like the
//! compiler it never fails: an operator without enough operands is skipped
//! and reported as a [`Diagnostic`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::DocId;
use crate::index::{DocSet, InvertedIndex};
use crate::query::diagnostic::Diagnostic;
use crate::query::rpn::{Operator, RpnToken};

/// A query operand found in a particular document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedTerm {
    /// A literal term with at least one posting in the document.
    Term(String),
    /// A phrase whose words occur adjacently, in order, in the document.
    Phrase(Vec<String>),
}

impl MatchedTerm {
    /// The token that marks where this match starts in a token stream: the
    /// term itself, or a phrase's first word.
    pub fn first_word(&self) -> Option<&str> {
        match self {
            MatchedTerm::Term(term) => Some(term),
            MatchedTerm::Phrase(words) => words.first().map(String::as_str),
        }
    }
}

impl fmt::Display for MatchedTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchedTerm::Term(term) => f.write_str(term),
            MatchedTerm::Phrase(words) => f.write_str(&words.join(" ")),
        }
    }
}

/// Outcome of evaluating an RPN sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Matching documents.
    pub docs: DocSet,
    /// Operators that were skipped and operands that went unused.
    pub diagnostics: Vec<Diagnostic>,
}

/// Evaluates RPN sequences against a borrowed index.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    index: &'a InvertedIndex,
}

impl<'a> Evaluator<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Evaluator { index }
    }

    /// Evaluate an RPN sequence to the set of matching documents.
    ///
    /// - a term pushes the documents containing it (empty if unseen);
    /// - a phrase pushes the documents containing its words adjacently;
    /// - AND / OR replace the top two sets by their intersection / union;
    /// - NOT replaces the top set by its complement against every indexed
    ///   document.
    ///
    /// The result is the last set left on the stack, or the empty set.
    pub fn evaluate(&self, rpn: &[RpnToken]) -> Evaluation {
        let mut stack: Vec<DocSet> = Vec::new();
        let mut diagnostics = Vec::new();

        for (position, token) in rpn.iter().enumerate() {
            match token {
                RpnToken::Term(term) => stack.push(self.index.docs_with_term(term)),
                RpnToken::Phrase(words) => stack.push(self.phrase_docs(words)),
                RpnToken::Operator(op) => {
                    if !self.apply(*op, &mut stack) {
                        diagnostics.push(Diagnostic::MissingOperand {
                            operator: *op,
                            position,
                        });
                    }
                }
            }
        }

        if stack.len() > 1 {
            diagnostics.push(Diagnostic::UnusedOperands {
                count: stack.len() - 1,
            });
        }

        Evaluation {
            docs: stack.pop().unwrap_or_default(),
            diagnostics,
        }
    }

    /// Apply one operator to the stack; `false` if it lacked operands, in
    /// which case the stack is untouched.
    fn apply(&self, op: Operator, stack: &mut Vec<DocSet>) -> bool {
        if stack.len() < op.arity() {
            return false;
        }

        let result = match op {
            Operator::Not => {
                let Some(operand) = stack.pop() else {
                    return false;
                };
                self.index
                    .all_doc_ids()
                    .difference(&operand)
                    .copied()
                    .collect()
            }
            Operator::And | Operator::Or => {
                let (Some(right), Some(mut left)) = (stack.pop(), stack.pop()) else {
                    return false;
                };
                if op == Operator::And {
                    left.retain(|doc| right.contains(doc));
                } else {
                    left.extend(right);
                }
                left
            }
        };

        stack.push(result);
        true
    }

    /// Documents containing the words consecutively and in order.
    ///
    /// Candidates are the sorted intersection of each word's documents;
    /// the search stops as soon as a word is missing from the index.
    pub fn phrase_docs(&self, words: &[String]) -> DocSet {
        let Some((first, rest)) = words.split_first() else {
            return DocSet::new();
        };
        let Some(posting) = self.index.posting(first) else {
            return DocSet::new();
        };

        let mut candidates = posting.sorted_doc_ids();
        for word in rest {
            let Some(posting) = self.index.posting(word) else {
                return DocSet::new();
            };
            candidates = intersect_sorted(&candidates, &posting.sorted_doc_ids());
            if candidates.is_empty() {
                return DocSet::new();
            }
        }

        candidates
            .into_iter()
            .filter(|&doc_id| self.phrase_in_doc(doc_id, words))
            .collect()
    }

    /// Whether word `i` sits at `p + i` for some position `p` of the first
    /// word in the document.
    pub fn phrase_in_doc(&self, doc_id: DocId, words: &[String]) -> bool {
        let mut lists: Vec<&[usize]> = Vec::with_capacity(words.len());
        for word in words {
            let positions = self
                .index
                .posting(word)
                .map(|posting| posting.positions(doc_id))
                .unwrap_or_default();
            if positions.is_empty() {
                return false;
            }
            lists.push(positions);
        }

        let Some((starts, rest)) = lists.split_first() else {
            return false;
        };
        starts.iter().any(|&start| {
            rest.iter()
                .enumerate()
                .all(|(offset, positions)| positions.contains(&(start + offset + 1)))
        })
    }

    /// Operands of `rpn` present in one document, deduplicated, in order of
    /// first appearance.
    ///
    /// This re-walks the operands independently of the boolean structure, so
    /// a term found only under a NOT is still reported for a document that
    /// matched through another clause.
    pub fn matched_terms(&self, doc_id: DocId, rpn: &[RpnToken]) -> Vec<MatchedTerm> {
        let mut matched = Vec::new();
        for token in rpn {
            let candidate = match token {
                RpnToken::Operator(_) => continue,
                RpnToken::Term(term) => {
                    let present = self
                        .index
                        .posting(term)
                        .is_some_and(|posting| posting.contains(doc_id));
                    if !present {
                        continue;
                    }
                    MatchedTerm::Term(term.clone())
                }
                RpnToken::Phrase(words) => {
                    if !self.phrase_in_doc(doc_id, words) {
                        continue;
                    }
                    MatchedTerm::Phrase(words.clone())
                }
            };
            if !matched.contains(&candidate) {
                matched.push(candidate);
            }
        }
        matched
    }
}

/// Intersect two ascending ID lists with a linear merge.
pub fn intersect_sorted(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }
    result
}
