//! Postfix (RPN) representation of compiled queries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Boolean operators understood by the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    /// Recognize an operator keyword, case-insensitively.
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("AND") {
            Some(Operator::And)
        } else if word.eq_ignore_ascii_case("OR") {
            Some(Operator::Or)
        } else if word.eq_ignore_ascii_case("NOT") {
            Some(Operator::Not)
        } else {
            None
        }
    }

    /// Binding strength: NOT > AND > OR.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Or => 1,
            Operator::And => 2,
            Operator::Not => 3,
        }
    }

    /// Number of operands the operator pops.
    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or => 2,
        }
    }

    /// Canonical uppercase keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a compiled query.
///
/// Operands and operators are distinct variants, so a literal term that
/// happens to read "AND" can never be confused with an operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpnToken {
    Operator(Operator),
    /// A normalized literal term.
    Term(String),
    /// Normalized words of a quoted phrase, in order. May be empty when
    /// every word of the phrase was a stop word.
    Phrase(Vec<String>),
}

impl RpnToken {
    /// Whether this token is an operand (term or phrase).
    pub fn is_operand(&self) -> bool {
        !matches!(self, RpnToken::Operator(_))
    }
}

impl fmt::Display for RpnToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpnToken::Operator(op) => write!(f, "{op}"),
            RpnToken::Term(term) => f.write_str(term),
            RpnToken::Phrase(words) => write!(f, "\"{}\"", words.join(" ")),
        }
    }
}

/// Render an RPN sequence as a space-separated string, e.g. `a b c AND OR`.
pub fn format_rpn(tokens: &[RpnToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
