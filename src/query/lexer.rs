//! Lexer for the query language.
//!
//! Splits a raw query into words, quoted phrases and parentheses:
//! - a `"` opens a phrase and the next `"` closes it; everything between is
//!   kept verbatim, spaces and parentheses included;
//! - outside quotes, whitespace separates words and `(` / `)` are lexemes of
//!   their own;
//! - a word still being typed when a quote opens is discarded;
//! - an unclosed phrase is dropped and reported.

use crate::query::diagnostic::Diagnostic;

/// Lexical unit of a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// An unquoted word, exactly as typed.
    Word(String),
    /// The content of a quoted span, exactly as typed.
    Phrase(String),
    LeftParen,
    RightParen,
}

/// Output of [`Lexer::lex`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    pub lexemes: Vec<Lexeme>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Single-pass, left-to-right query lexer.
pub struct Lexer<'a> {
    input: &'a str,
    word: String,
    lexed: Lexed,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over the given query.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            word: String::new(),
            lexed: Lexed::default(),
        }
    }

    /// Consume the lexer and split the whole input.
    pub fn lex(mut self) -> Lexed {
        let input = self.input;
        let mut phrase: Option<String> = None;

        for ch in input.chars() {
            if let Some(text) = phrase.as_mut() {
                if ch == '"' {
                    if let Some(text) = phrase.take().filter(|t| !t.is_empty()) {
                        self.lexed.lexemes.push(Lexeme::Phrase(text));
                    }
                } else {
                    text.push(ch);
                }
                continue;
            }

            match ch {
                '"' => {
                    self.word.clear();
                    phrase = Some(String::new());
                }
                '(' => {
                    self.flush_word();
                    self.lexed.lexemes.push(Lexeme::LeftParen);
                }
                ')' => {
                    self.flush_word();
                    self.lexed.lexemes.push(Lexeme::RightParen);
                }
                c if c.is_whitespace() => self.flush_word(),
                c => self.word.push(c),
            }
        }

        self.flush_word();
        if let Some(partial) = phrase {
            self.lexed
                .diagnostics
                .push(Diagnostic::UnterminatedQuote { partial });
        }

        self.lexed
    }

    fn flush_word(&mut self) {
        if !self.word.is_empty() {
            let word = std::mem::take(&mut self.word);
            self.lexed.lexemes.push(Lexeme::Word(word));
        }
    }
}
