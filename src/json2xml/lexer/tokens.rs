//! Token definitions for the restricted JSON dialect
//!
//! All tokens are defined using the logos derive macro. The dialect keeps
//! lexing deliberately simple:
//!
//! - Strings have no escape handling. The lexeme is everything between the
//!   opening quote and the next quote, so a literal `\"` terminates the
//!   string early. An unterminated string runs to the end of the input.
//! - Numbers start with a digit and continue over digits and dots. There is
//!   no sign or exponent support; `-5` lexes as an error token `-` followed
//!   by the number `5`.
//! - The keywords `true`, `false` and `null` are matched by exact prefix,
//!   with no word-boundary check (`truex` lexes `true` then continues at
//!   the `x`).
//! - Any other non-whitespace character becomes a one-character `Error`
//!   token and scanning continues. The lexer never aborts.
//! - The whitespace predicate is ASCII-only (space, tab, CR, LF, vertical
//!   tab, form feed). Unicode separators such as U+1680 or U+2028 are not
//!   skipped; they lex as `Error` tokens like any other stray character.

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in the input dialect
#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
pub enum Token {
    // Structural symbols
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // Literal keywords
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // A quoted string; the lexeme excludes the quotes
    #[regex(r#""[^"]*"?"#, string_body, priority = 3)]
    Str(String),

    // Digits and dots, starting with a digit
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_owned(), priority = 3)]
    Number(String),

    // Catch-all: any single unrecognized character
    #[regex(r"[^ \t\r\n\x0B\x0C]", |lex| lex.slice().to_owned(), priority = 1)]
    Error(String),

    // Appended once by `tokenize` after the scan completes
    Eof,
}

/// Strip the surrounding quotes from a string lexeme. The closing quote is
/// missing when the string runs to the end of the input.
fn string_body(lex: &mut logos::Lexer<Token>) -> String {
    let body = &lex.slice()[1..];
    body.strip_suffix('"').unwrap_or(body).to_owned()
}

impl Token {
    /// The exact lexeme of this token, with `"EOF"` for the synthetic
    /// end-of-stream token.
    pub fn lexeme(&self) -> &str {
        match self {
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
            Token::Str(s) | Token::Number(s) | Token::Error(s) => s,
            Token::Eof => "EOF",
        }
    }

    /// Lowercase name of the token kind, used by the simple dump format
    /// and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::LBrace => "lbrace",
            Token::RBrace => "rbrace",
            Token::LBracket => "lbracket",
            Token::RBracket => "rbracket",
            Token::Comma => "comma",
            Token::Colon => "colon",
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
            Token::Str(_) => "string",
            Token::Number(_) => "number",
            Token::Error(_) => "error",
            Token::Eof => "eof",
        }
    }

    /// Check if this token is a scalar member value
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Token::Str(_) | Token::Number(_) | Token::True | Token::False | Token::Null
        )
    }

    /// Check if this token is a synchronization point for panic-mode
    /// recovery (one of `{ } [ ] , :`)
    pub fn is_sync(&self) -> bool {
        matches!(
            self,
            Token::LBrace
                | Token::RBrace
                | Token::LBracket
                | Token::RBracket
                | Token::Comma
                | Token::Colon
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.kind_name(), self.lexeme())
    }
}
