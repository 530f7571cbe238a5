//! File and string processing API for the JSON-to-XML translator
//!
//! This module provides the translation entry points plus a small
//! stage/format surface for inspecting intermediate output: the `tokens`
//! stage dumps the token stream (in a simple tag format or as JSON) and the
//! `xml` stage runs the full translation.
//!
//! The output sink of a translation run is flushed exactly once, on every
//! exit path, whether the parse was clean, recovered, or failed at the
//! root.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::json2xml::emitter::Emitter;
use crate::json2xml::lexer::{tokenize, Token};
use crate::json2xml::parser::{Parser, Report};

/// Tag names used for the emitted document. The root element wraps the
/// whole output; the item element wraps each top-level array object.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub root_tag: String,
    pub item_tag: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_tag: "records".to_string(),
            item_tag: "item".to_string(),
        }
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateError {
    Io(String),
    InvalidStage(String),
    InvalidFormat(String),
}

impl std::error::Error for TranslateError {}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Io(msg) => write!(f, "IO error: {}", msg),
            TranslateError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            TranslateError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
        }
    }
}

impl From<io::Error> for TranslateError {
    fn from(err: io::Error) -> Self {
        TranslateError::Io(err.to_string())
    }
}

/// Translate a JSON source string, writing the XML into `sink`.
///
/// Parse problems never abort the run; they come back in the [`Report`]
/// while the sink receives whatever portion of the input was recognized.
/// Only sink write failures produce an `Err`.
pub fn translate<W: Write>(
    source: &str,
    sink: &mut W,
    options: &Options,
) -> Result<Report, TranslateError> {
    let tokens = tokenize(source);
    let mut parser = Parser::new(
        &tokens,
        Emitter::new(&mut *sink),
        &options.root_tag,
        &options.item_tag,
    );
    let result = parser.parse();
    let report = parser.into_report();
    // Flush before surfacing any write error so the sink is finalized on
    // every exit path.
    sink.flush()?;
    result?;
    Ok(report)
}

/// Translate a JSON source string into an in-memory XML string.
pub fn translate_to_string(
    source: &str,
    options: &Options,
) -> Result<(String, Report), TranslateError> {
    let mut sink = Vec::new();
    let report = translate(source, &mut sink, options)?;
    Ok((String::from_utf8_lossy(&sink).into_owned(), report))
}

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Tokens,
    Xml,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
    Xml,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "xml", "tokens-simple" or "tokens-json"
    pub fn from_string(format_str: &str) -> Result<Self, TranslateError> {
        let mut parts = format_str.splitn(2, '-');
        let stage = parts.next().unwrap_or("");
        let format = parts.next();

        match (stage, format) {
            ("xml", None) => Ok(ProcessingSpec {
                stage: ProcessingStage::Xml,
                format: OutputFormat::Xml,
            }),
            ("tokens", Some("simple")) | ("tokens", None) => Ok(ProcessingSpec {
                stage: ProcessingStage::Tokens,
                format: OutputFormat::Simple,
            }),
            ("tokens", Some("json")) => Ok(ProcessingSpec {
                stage: ProcessingStage::Tokens,
                format: OutputFormat::Json,
            }),
            ("tokens", Some(other)) => Err(TranslateError::InvalidFormat(other.to_string())),
            ("xml", Some(_)) => Err(TranslateError::InvalidFormat(format_str.to_string())),
            _ => Err(TranslateError::InvalidStage(stage.to_string())),
        }
    }
}

/// Output of one `process_file` run. For the tokens stage the report is
/// empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    pub output: String,
    pub report: Report,
}

/// Process a JSON file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &Options,
) -> Result<ProcessOutput, TranslateError> {
    let file_path = file_path.as_ref();
    let source = fs::read_to_string(file_path)
        .map_err(|e| TranslateError::Io(format!("failed to read {}: {}", file_path.display(), e)))?;

    match spec.stage {
        ProcessingStage::Tokens => {
            let tokens = tokenize(&source);
            let output = format_tokens(&tokens, &spec.format)?;
            Ok(ProcessOutput {
                output,
                report: Report::default(),
            })
        }
        ProcessingStage::Xml => {
            let (output, report) = translate_to_string(&source, options)?;
            Ok(ProcessOutput { output, report })
        }
    }
}

/// Format a token stream according to the specified format
pub fn format_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, TranslateError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                match token {
                    Token::Str(s) => result.push_str(&format!("<string:{}>\n", s)),
                    Token::Number(s) => result.push_str(&format!("<number:{}>\n", s)),
                    Token::Error(s) => result.push_str(&format!("<error:{}>\n", s)),
                    other => result.push_str(&format!("<{}>\n", other.kind_name())),
                }
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(tokens)
                .map_err(|e| TranslateError::Io(e.to_string()))?;
            Ok(json)
        }
        OutputFormat::Xml => Err(TranslateError::InvalidFormat(
            "xml format only works with the xml stage".to_string(),
        )),
    }
}
