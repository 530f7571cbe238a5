//! Parser module for the restricted JSON grammar
//!
//! The grammar, informally:
//!
//!     document    := '{' array-items '}'
//!     array-items := '[' (object (',' object)*)? ']'
//!     object      := '{' (member (',' member)*)? '}'
//!     member      := STRING ':' (scalar | nested-array)
//!     scalar      := STRING | NUMBER | TRUE | FALSE | NULL
//!     nested-array:= '[' (object (',' object)*)? ']'
//!
//! Parsing is recursive descent over the token sequence, with a cursor
//! providing peek/advance primitives. No AST is built: XML fragments are
//! emitted as each rule is recognized, so emission order is grammar
//! traversal order. Grammar violations below the root are reported as
//! diagnostics and recovered with panic-mode synchronization; a violation
//! at the very top of the grammar is terminal for the run.
//!
//! The loops that consume object and member lists check for the closing
//! token before anything else, so a trailing comma before `]` or `}` is
//! tolerated. That tolerance, like the lexer's missing escape handling, is
//! preserved as documented behavior.

pub mod cursor;
pub mod grammar;
pub mod recovery;

pub use cursor::Cursor;
pub use grammar::{Diagnostic, DiagnosticKind, Parser, Report};
pub use recovery::synchronize;
