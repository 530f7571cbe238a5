//! Recursive-descent parser driving XML emission
//!
//! The parser is an explicit context object owning the cursor, the emitter
//! and the collected diagnostics, so independent runs share no state. Each
//! grammar rule is one method; emission happens inline as rules are
//! recognized (open tag before children, close tag after).
//!
//! Error handling follows three tiers:
//! - a mismatch of the opening `{` of the whole document is a structural
//!   failure: reported once, nothing emitted, no recovery;
//! - a failed match inside an object member reports a grammar violation,
//!   resynchronizes with [`synchronize`], and the member loop resumes from
//!   wherever recovery left the cursor;
//! - failed matches of structural brackets report a violation, recover, and
//!   parsing proceeds with a placeholder token, as if the bracket had been
//!   present.
//!
//! Diagnostics are advisory: the XML output still contains whatever part of
//! the input was recognized, with no rollback.

use std::fmt;
use std::io::{self, Write};

use crate::json2xml::emitter::Emitter;
use crate::json2xml::lexer::Token;
use crate::json2xml::parser::cursor::Cursor;
use crate::json2xml::parser::recovery::synchronize;

/// How severe a diagnostic is for the run that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A required token did not match; recovered locally.
    GrammarViolation,
    /// The document did not start with `{`; terminal for the run.
    StructuralFailure,
}

/// One reported parse problem: the expected construct and the offending
/// token.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub found: Token,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[error] {}, found {}", self.message, self.found)
    }
}

/// All diagnostics collected by one translation run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_structural_failure(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::StructuralFailure)
    }
}

/// Parser context for one translation run.
pub struct Parser<'a, W: Write> {
    cursor: Cursor<'a>,
    emitter: Emitter<W>,
    diagnostics: Vec<Diagnostic>,
    root_tag: &'a str,
    item_tag: &'a str,
}

impl<'a, W: Write> Parser<'a, W> {
    pub fn new(
        tokens: &'a [Token],
        emitter: Emitter<W>,
        root_tag: &'a str,
        item_tag: &'a str,
    ) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            emitter,
            diagnostics: Vec::new(),
            root_tag,
            item_tag,
        }
    }

    /// Parse the whole document, emitting XML as rules are recognized.
    ///
    /// Returns `Err` only for sink write failures; parse problems are
    /// collected as diagnostics instead.
    pub fn parse(&mut self) -> io::Result<()> {
        if matches!(self.cursor.peek(), Token::LBrace) {
            self.expect_lexeme("{");
            self.emitter.open(self.root_tag)?;
            self.parse_array_items()?;
            self.expect_lexeme("}");
            self.emitter.close(self.root_tag)?;
        } else {
            self.report(
                DiagnosticKind::StructuralFailure,
                "expected '{' at the start of the document",
            );
        }
        Ok(())
    }

    /// Hand back the diagnostics collected during the parse.
    pub fn into_report(self) -> Report {
        Report {
            diagnostics: self.diagnostics,
        }
    }

    fn parse_array_items(&mut self) -> io::Result<()> {
        if matches!(self.cursor.peek(), Token::LBracket) {
            self.expect_lexeme("[");
            while !matches!(self.cursor.peek(), Token::RBracket | Token::Eof) {
                self.parse_object()?;
                if matches!(self.cursor.peek(), Token::Comma) {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
            self.expect_lexeme("]");
        } else {
            self.report(
                DiagnosticKind::GrammarViolation,
                "expected '[' to start the top-level array",
            );
        }
        Ok(())
    }

    fn parse_object(&mut self) -> io::Result<()> {
        self.expect_lexeme("{");
        self.emitter.open(self.item_tag)?;
        while !matches!(self.cursor.peek(), Token::RBrace | Token::Eof) {
            let key = self.expect_key();
            if matches!(key, Token::Error(_)) {
                continue;
            }
            let colon = self.expect_lexeme(":");
            if matches!(colon, Token::Error(_)) {
                continue;
            }

            if self.cursor.peek().is_scalar() {
                let value = self.cursor.advance();
                self.emitter.leaf(key.lexeme(), value.lexeme())?;
            } else if matches!(self.cursor.peek(), Token::LBracket) {
                self.expect_lexeme("[");
                self.emitter.open(key.lexeme())?;
                while !matches!(self.cursor.peek(), Token::RBracket | Token::Eof) {
                    self.parse_object()?;
                    if matches!(self.cursor.peek(), Token::Comma) {
                        self.cursor.advance();
                    }
                }
                self.expect_lexeme("]");
                self.emitter.close(key.lexeme())?;
            } else {
                self.violation("expected a scalar or nested array as member value");
                self.recover();
                continue;
            }

            if matches!(self.cursor.peek(), Token::Comma) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        self.expect_lexeme("}");
        self.emitter.close(self.item_tag)?;
        Ok(())
    }

    /// Match a token by its exact lexeme. On a mismatch, report, recover,
    /// and return a placeholder carrying the expected lexeme.
    fn expect_lexeme(&mut self, expected: &str) -> Token {
        if self.cursor.peek().lexeme() == expected {
            self.cursor.advance()
        } else {
            self.violation(&format!("expected '{}'", expected));
            self.recover();
            Token::Error(expected.to_owned())
        }
    }

    /// Match a string token for a member key. On a mismatch, report,
    /// recover, and return the `"?"` placeholder.
    fn expect_key(&mut self) -> Token {
        if matches!(self.cursor.peek(), Token::Str(_)) {
            self.cursor.advance()
        } else {
            self.violation("expected a string member key");
            self.recover();
            Token::Error("?".to_owned())
        }
    }

    fn violation(&mut self, message: &str) {
        self.report(DiagnosticKind::GrammarViolation, message);
    }

    fn report(&mut self, kind: DiagnosticKind, message: &str) {
        let found = self.cursor.peek().clone();
        self.diagnostics.push(Diagnostic {
            kind,
            message: message.to_owned(),
            found,
        });
    }

    fn recover(&mut self) {
        let pos = synchronize(self.cursor.tokens(), self.cursor.pos());
        self.cursor.seek(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json2xml::lexer::tokenize;

    fn run(source: &str) -> (String, Report) {
        let tokens = tokenize(source);
        let mut sink = Vec::new();
        let mut parser = Parser::new(&tokens, Emitter::new(&mut sink), "records", "item");
        parser.parse().unwrap();
        let report = parser.into_report();
        (String::from_utf8(sink).unwrap(), report)
    }

    #[test]
    fn test_empty_array() {
        let (output, report) = run("{[]}");
        assert_eq!(output, "<records>\n</records>\n");
        assert!(report.is_clean());
    }

    #[test]
    fn test_single_scalar_member() {
        let (output, report) = run("{[{\"a\":\"1\"}]}");
        assert_eq!(
            output,
            "<records>\n\t<item>\n\t\t<a>1</a>\n\t</item>\n</records>\n"
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_empty_object() {
        let (output, report) = run("{[{}]}");
        assert_eq!(output, "<records>\n\t<item>\n\t</item>\n</records>\n");
        assert!(report.is_clean());
    }

    #[test]
    fn test_all_scalar_kinds() {
        let (output, report) =
            run("{[{\"s\":\"x\",\"n\":4.5,\"t\":true,\"f\":false,\"z\":null}]}");
        assert_eq!(
            output,
            "<records>\n\
             \t<item>\n\
             \t\t<s>x</s>\n\
             \t\t<n>4.5</n>\n\
             \t\t<t>true</t>\n\
             \t\t<f>false</f>\n\
             \t\t<z>null</z>\n\
             \t</item>\n\
             </records>\n"
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_multiple_objects() {
        let (output, report) = run("{[{\"a\":\"1\"},{\"a\":\"2\"}]}");
        assert_eq!(
            output,
            "<records>\n\
             \t<item>\n\
             \t\t<a>1</a>\n\
             \t</item>\n\
             \t<item>\n\
             \t\t<a>2</a>\n\
             \t</item>\n\
             </records>\n"
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_nested_array_member() {
        let (output, report) = run("{[{\"tags\":[{\"x\":\"1\"},{\"x\":\"2\"}]}]}");
        assert_eq!(
            output,
            "<records>\n\
             \t<item>\n\
             \t\t<tags>\n\
             \t\t\t<item>\n\
             \t\t\t\t<x>1</x>\n\
             \t\t\t</item>\n\
             \t\t\t<item>\n\
             \t\t\t\t<x>2</x>\n\
             \t\t\t</item>\n\
             \t\t</tags>\n\
             \t</item>\n\
             </records>\n"
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_trailing_comma_is_tolerated() {
        let (with_comma, report) = run("{[{\"a\":\"1\"},]}");
        let (without_comma, _) = run("{[{\"a\":\"1\"}]}");
        assert_eq!(with_comma, without_comma);
        assert!(report.is_clean());
    }

    #[test]
    fn test_trailing_comma_in_object_is_tolerated() {
        let (with_comma, report) = run("{[{\"a\":\"1\",}]}");
        let (without_comma, _) = run("{[{\"a\":\"1\"}]}");
        assert_eq!(with_comma, without_comma);
        assert!(report.is_clean());
    }

    #[test]
    fn test_structural_failure_emits_nothing() {
        let (output, report) = run("[{\"a\":\"1\"}]");
        assert_eq!(output, "");
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(
            report.diagnostics[0].kind,
            DiagnosticKind::StructuralFailure
        );
        assert!(report.has_structural_failure());
    }

    #[test]
    fn test_missing_array_reports_violation() {
        let (_, report) = run("{\"a\":\"1\"}");
        assert!(!report.is_clean());
        assert!(!report.has_structural_failure());
    }

    #[test]
    fn test_stray_character_recovers_to_next_member() {
        // The '#' sits where a value should be: one violation, then the
        // sync walk consumes the comma and parsing resumes at "b".
        let (output, report) = run("{[{\"a\": #, \"b\":\"2\"}]}");
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(
            report.diagnostics[0].kind,
            DiagnosticKind::GrammarViolation
        );
        assert_eq!(
            output,
            "<records>\n\t<item>\n\t\t<b>2</b>\n\t</item>\n</records>\n"
        );
    }

    #[test]
    fn test_truncated_input_terminates() {
        // Unterminated documents must not loop; diagnostics pile up but the
        // run finishes and closes whatever it opened.
        let (output, report) = run("{[{\"a\":");
        assert!(!report.is_clean());
        assert!(output.starts_with("<records>\n"));
        assert!(output.ends_with("</records>\n"));
    }

    #[test]
    fn test_diagnostic_display_names_expected_and_found() {
        let (_, report) = run("{[{\"a\" \"1\"}]}");
        let message = report.diagnostics[0].to_string();
        assert!(message.contains("expected ':'"), "got: {}", message);
        assert!(message.contains("string('1')"), "got: {}", message);
    }
}
