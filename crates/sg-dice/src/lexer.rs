//! Tokenizer for dice notation.
//!
//! Whitespace is insignificant, so `"2d6 + 3"` and `"2d6+3"` lex to the same
//! token stream. The `d` separator is accepted in either case.

use std::ops::Range;

use logos::Logos;

use crate::error::{DiceResult, NotationError};

/// A dice notation token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum Token {
    #[regex("[0-9]+")]
    Number,

    #[token("d")]
    #[token("D")]
    D,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,
}

/// A token together with the text and byte range it was lexed from.
#[derive(Debug, Clone)]
pub(crate) struct Lexeme<'a> {
    pub token: Token,
    pub text: &'a str,
    pub span: Range<usize>,
}

impl Lexeme<'_> {
    /// The operator character of a `+`/`-` lexeme.
    pub fn op(&self) -> char {
        match self.token {
            Token::Minus => '-',
            _ => '+',
        }
    }
}

/// Lex notation into tokens, stopping at the first unrecognised character.
pub(crate) fn lex(source: &str) -> DiceResult<Vec<Lexeme<'_>>> {
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => lexemes.push(Lexeme {
                token,
                text: lexer.slice(),
                span,
            }),
            Err(()) => {
                return Err(NotationError::UnexpectedChar {
                    found: lexer.slice().to_string(),
                    span: span.into(),
                });
            }
        }
    }

    Ok(lexemes)
}
