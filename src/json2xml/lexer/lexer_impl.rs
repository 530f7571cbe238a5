//! Implementation of the JSON dialect lexer
//!
//! This module provides the tokenization entry point. The actual scanning
//! is handled entirely by logos; the only post-processing is appending the
//! single `Eof` token that terminates every token sequence.

use crate::json2xml::lexer::tokens::Token;
use logos::Logos;

/// Tokenize a source string into the full token sequence.
///
/// The sequence is always terminated by exactly one `Eof` token, regardless
/// of how well-formed the input is.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect();
    tokens.push(Token::Eof);
    tokens
}
