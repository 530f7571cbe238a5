//! Lexer module for the restricted JSON dialect
//!
//! This module contains the tokenization logic for the input dialect,
//! including token definitions and the lexer implementation. Tokenization
//! is handled by a vanilla logos lexer; a single-character catch-all rule
//! turns unrecognized characters into `Error` tokens so that scanning
//! always runs to the end of the input.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::tokenize;
pub use tokens::Token;
