//! Query compiler: raw query string to postfix (RPN) token sequence.
//!
//! Compilation is total. Any input, however malformed, yields a (possibly
//! empty) token sequence; repairs are reported as diagnostics.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use gladius::analysis::StandardAnalyzer;
//! use gladius::query::QueryCompiler;
//!
//! let compiler = QueryCompiler::new(Arc::new(StandardAnalyzer::new().unwrap()));
//! let compiled = compiler.compile("a OR b AND c");
//!
//! // "a" is a stop word, so it stays as its lowercase literal
//! assert_eq!(compiled.to_string(), "a b c AND OR");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::query::diagnostic::Diagnostic;
use crate::query::lexer::{Lexeme, Lexer};
use crate::query::rpn::{Operator, RpnToken, format_rpn};

/// Result of compiling a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledQuery {
    /// Postfix token sequence, ready for a stack evaluator.
    pub tokens: Vec<RpnToken>,
    /// Repairs made while compiling.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledQuery {
    /// Whether the query compiled to nothing.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The operand tokens (terms and phrases), in RPN order.
    pub fn operands(&self) -> impl Iterator<Item = &RpnToken> {
        self.tokens.iter().filter(|t| t.is_operand())
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rpn(&self.tokens))
    }
}

/// Entry on the shunting-yard operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    LeftParen,
}

/// Normalized lexeme, after operator recognition and term analysis.
enum Normalized {
    Operator(Operator),
    Operand(RpnToken),
    LeftParen,
    RightParen,
}

/// Compiles boolean query strings into RPN.
///
/// Words are normalized with the same analyzer that built the index, so a
/// query term matches exactly the indexed terms it would have produced.
#[derive(Clone)]
pub struct QueryCompiler {
    analyzer: Arc<dyn Analyzer>,
}

impl fmt::Debug for QueryCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCompiler")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl QueryCompiler {
    /// Create a compiler that normalizes terms with the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        QueryCompiler { analyzer }
    }

    /// Compile a query string.
    ///
    /// Precedence is NOT > AND > OR, equal precedence pops left to right, and
    /// parentheses group. An unmatched `)` closes nothing, and an unclosed
    /// `(` is dropped while the operators above it are still emitted.
    pub fn compile(&self, query: &str) -> CompiledQuery {
        let lexed = Lexer::new(query).lex();
        let mut diagnostics = lexed.diagnostics;
        let mut output = Vec::new();
        let mut stack: Vec<Pending> = Vec::new();

        for lexeme in lexed.lexemes {
            match self.normalize(lexeme) {
                Normalized::Operand(token) => output.push(token),
                Normalized::LeftParen => stack.push(Pending::LeftParen),
                Normalized::RightParen => {
                    let mut closed = false;
                    while let Some(pending) = stack.pop() {
                        match pending {
                            Pending::Operator(op) => output.push(RpnToken::Operator(op)),
                            Pending::LeftParen => {
                                closed = true;
                                break;
                            }
                        }
                    }
                    if !closed {
                        diagnostics.push(Diagnostic::UnmatchedRightParen);
                    }
                }
                Normalized::Operator(op) => {
                    while let Some(&Pending::Operator(top)) = stack.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        stack.pop();
                        output.push(RpnToken::Operator(top));
                    }
                    stack.push(Pending::Operator(op));
                }
            }
        }

        while let Some(pending) = stack.pop() {
            match pending {
                Pending::Operator(op) => output.push(RpnToken::Operator(op)),
                Pending::LeftParen => diagnostics.push(Diagnostic::UnmatchedLeftParen),
            }
        }

        CompiledQuery {
            tokens: output,
            diagnostics,
        }
    }

    fn normalize(&self, lexeme: Lexeme) -> Normalized {
        match lexeme {
            Lexeme::LeftParen => Normalized::LeftParen,
            Lexeme::RightParen => Normalized::RightParen,
            Lexeme::Phrase(text) => {
                Normalized::Operand(RpnToken::Phrase(self.analyzer.terms(&text)))
            }
            Lexeme::Word(word) => match Operator::from_keyword(&word) {
                Some(op) => Normalized::Operator(op),
                None => Normalized::Operand(RpnToken::Term(self.normalize_term(&word))),
            },
        }
    }

    /// Map one query word to exactly one literal operand.
    ///
    /// No sub-token keeps the lowercase word (e.g. a stop word); one sub-token
    /// is used as is; several are joined with `_`. Indexed terms never contain
    /// `_`, so a joined operand matches nothing.
    fn normalize_term(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        let mut terms = self.analyzer.terms(&lowered);
        match terms.len() {
            0 => lowered,
            1 => terms.remove(0),
            _ => terms.join("_"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StandardAnalyzer;
    use crate::config::AnalysisConfig;

    fn compiler() -> QueryCompiler {
        QueryCompiler::new(Arc::new(StandardAnalyzer::new().unwrap()))
    }

    fn rpn(query: &str) -> String {
        compiler().compile(query).to_string()
    }

    fn term(s: &str) -> RpnToken {
        RpnToken::Term(s.to_string())
    }

    #[test]
    fn test_empty_query() {
        assert!(compiler().compile("").is_empty());
        assert!(compiler().compile("   ").is_empty());
        assert!(compiler().compile("").diagnostics.is_empty());
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(rpn("x OR y AND z"), "x y z AND OR");
        assert_eq!(rpn("x OR y AND z"), rpn("x OR (y AND z)"));
        assert_eq!(rpn("x AND y OR z"), "x y AND z OR");
    }

    #[test]
    fn test_left_associative_ties() {
        assert_eq!(rpn("x OR y OR z"), "x y OR z OR");
        assert_eq!(rpn("x AND y AND z"), "x y AND z AND");
    }

    #[test]
    fn test_not_binds_tightest() {
        assert_eq!(rpn("x AND NOT y"), "x y NOT AND");
        assert_eq!(rpn("NOT x AND y"), "x NOT y AND");
        assert_eq!(rpn("NOT (x OR y)"), "x y OR NOT");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(rpn("(x OR y) AND z"), "x y OR z AND");
    }

    #[test]
    fn test_operators_are_case_insensitive() {
        let compiled = compiler().compile("cats and dogs Or birds");

        assert_eq!(compiled.to_string(), "cats dogs AND birds OR");
        assert_eq!(compiled.tokens[2], RpnToken::Operator(Operator::And));
    }

    #[test]
    fn test_terms_are_normalized() {
        let compiled = compiler().compile("CATS");
        assert_eq!(compiled.tokens, vec![term("cats")]);

        // Punctuation is stripped by the analyzer when one sub-token remains
        assert_eq!(compiler().compile("cats!").tokens, vec![term("cats")]);

        // A stop word keeps its lowercase literal
        assert_eq!(compiler().compile("The").tokens, vec![term("the")]);
    }

    #[test]
    fn test_multi_token_word_is_joined() {
        assert_eq!(compiler().compile("e-mail").tokens, vec![term("e_mail")]);
        assert_eq!(compiler().compile("x.y.z").tokens, vec![term("x_y_z")]);
    }

    #[test]
    fn test_stemming_applies_to_terms() {
        let config = AnalysisConfig::default().with_stemming(true);
        let analyzer = StandardAnalyzer::from_config(&config).unwrap();
        let compiler = QueryCompiler::new(Arc::new(analyzer));

        assert_eq!(compiler.compile("Running").tokens, vec![term("run")]);
    }

    fn phrase(words: &[&str]) -> RpnToken {
        RpnToken::Phrase(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_phrase_is_analyzed() {
        let compiled = compiler().compile("\"The Small Cats\" AND pets");

        assert_eq!(
            compiled.tokens,
            vec![
                phrase(&["small", "cats"]),
                term("pets"),
                RpnToken::Operator(Operator::And),
            ]
        );
    }

    #[test]
    fn test_phrase_with_operator_text_is_not_an_operator() {
        let compiled = compiler().compile("\"OR\" x");
        assert_eq!(compiled.tokens, vec![phrase(&["or"]), term("x")]);

        // Every word is a stop word: the operand survives with no words
        let compiled = compiler().compile("\"AND the\"");
        assert_eq!(compiled.tokens, vec![phrase(&[])]);
    }

    #[test]
    fn test_unmatched_right_paren() {
        let compiled = compiler().compile("x OR y) AND z");

        assert_eq!(compiled.to_string(), "x y OR z AND");
        assert_eq!(compiled.diagnostics, vec![Diagnostic::UnmatchedRightParen]);
    }

    #[test]
    fn test_unmatched_left_paren() {
        let compiled = compiler().compile("x AND (y OR z");

        assert_eq!(compiled.to_string(), "x y z OR AND");
        assert_eq!(compiled.diagnostics, vec![Diagnostic::UnmatchedLeftParen]);
    }

    #[test]
    fn test_dangling_operators_still_compile() {
        assert_eq!(rpn("AND"), "AND");
        assert_eq!(rpn("x OR"), "x OR");
        assert_eq!(rpn("NOT NOT x"), "NOT x NOT");
    }

    #[test]
    fn test_operands_iterator() {
        let compiled = compiler().compile("cats OR \"small dogs\" AND NOT birds");
        let operands: Vec<String> = compiled.operands().map(|t| t.to_string()).collect();

        assert_eq!(operands, vec!["cats", "\"small dogs\"", "birds"]);
    }
}
