//! Panic-mode recovery for the recursive-descent parser
//!
//! After a grammar violation the parser resynchronizes by skipping tokens
//! until one of the structural symbols `{ } [ ] , :` or the end of the
//! stream. A found synchronization token is consumed as the final step.
//! This is best-effort: it does not guarantee the rest of the parse is
//! structurally coherent, only that the cursor makes forward progress.

use crate::json2xml::lexer::Token;

/// Compute the position the parse should resume from after a violation at
/// `pos`. Whenever `pos` is in range, the returned position is strictly
/// greater than `pos`.
pub fn synchronize(tokens: &[Token], mut pos: usize) -> usize {
    while pos < tokens.len() && !tokens[pos].is_sync() {
        pos += 1;
    }
    if pos < tokens.len() {
        pos += 1;
    }
    pos
}
