//! Side-channel reports of malformed queries.
//!
//! Compilation and evaluation never fail. When they have to repair or skip
//! part of a query they record a [`Diagnostic`] next to the result; the
//! result itself is the same whether or not anyone reads the diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::rpn::Operator;

/// Something the compiler or evaluator repaired or ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// A quote was opened and never closed; its content was discarded.
    UnterminatedQuote { partial: String },
    /// A `)` had no matching `(`.
    UnmatchedRightParen,
    /// A `(` was never closed.
    UnmatchedLeftParen,
    /// An operator at `position` in the RPN had too few operands and was skipped.
    MissingOperand { operator: Operator, position: usize },
    /// Evaluation ended with more than one set on the stack; only the last was used.
    UnusedOperands { count: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnterminatedQuote { partial } => {
                write!(f, "unterminated quote, discarded \"{partial}\"")
            }
            Diagnostic::UnmatchedRightParen => write!(f, "unmatched ')'"),
            Diagnostic::UnmatchedLeftParen => write!(f, "unmatched '('"),
            Diagnostic::MissingOperand { operator, position } => {
                write!(f, "{operator} at RPN position {position} lacks operands, skipped")
            }
            Diagnostic::UnusedOperands { count } => {
                write!(f, "{count} operand(s) left unused; only the last one decides")
            }
        }
    }
}
