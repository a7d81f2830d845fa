//! Query language: compilation to RPN, boolean evaluation and scoring.
//!
//! ```text
//! query string → Lexer → QueryCompiler → RPN → Evaluator → DocSet
//!                                                   ↓
//!                                   matched terms → Scorer → score
//! ```
//!
//! The grammar is boolean: `AND`, `OR` and `NOT` (any case) with
//! precedence NOT > AND > OR, parentheses for grouping, and double-quoted
//! phrases that must appear as adjacent words.

pub mod compiler;
pub mod diagnostic;
pub mod evaluator;
pub mod lexer;
pub mod rpn;
pub mod scorer;

pub use compiler::{CompiledQuery, QueryCompiler};
pub use diagnostic::Diagnostic;
pub use evaluator::{Evaluation, Evaluator, MatchedTerm};
pub use rpn::{Operator, RpnToken, format_rpn};
pub use scorer::{Scorer, TfIdfScorer};
