//! Token cursor with peek/advance primitives
//!
//! The cursor holds a non-owning view of the token sequence and a single
//! read position. The position only moves forward, and only through
//! `advance` or `seek`; `peek` never moves it. Reading at or past the end
//! always yields the synthetic `Eof` token instead of failing.

use crate::json2xml::lexer::Token;

static EOF: Token = Token::Eof;

/// Read position into a token sequence.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The token at the current position, without advancing.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    /// Return the token at the current position and advance past it.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    /// Move the position forward, used after panic-mode recovery computes
    /// the synchronization point. The position never moves backwards.
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor position may only advance");
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_advance() {
        let tokens = vec![Token::LBrace, Token::Eof];
        let cursor = Cursor::new(&tokens);
        assert_eq!(cursor.peek(), &Token::LBrace);
        assert_eq!(cursor.peek(), &Token::LBrace);
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_advance_returns_current_and_moves() {
        let tokens = vec![Token::LBrace, Token::RBrace, Token::Eof];
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.advance(), Token::LBrace);
        assert_eq!(cursor.advance(), Token::RBrace);
        assert_eq!(cursor.advance(), Token::Eof);
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn test_reads_past_the_end_yield_eof() {
        let tokens = vec![Token::LBrace];
        let mut cursor = Cursor::new(&tokens);
        cursor.advance();
        assert_eq!(cursor.peek(), &Token::Eof);
        assert_eq!(cursor.advance(), Token::Eof);
        // Position saturates at the end of the sequence
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn test_seek_moves_forward() {
        let tokens = vec![Token::LBrace, Token::Comma, Token::RBrace, Token::Eof];
        let mut cursor = Cursor::new(&tokens);
        cursor.seek(2);
        assert_eq!(cursor.peek(), &Token::RBrace);
    }
}
