//! # json2xml
//!
//! A translator from a restricted JSON dialect to XML.
//!
//! The input dialect is an object wrapping a single array of flat or nested
//! objects. Structural nesting in the JSON becomes element nesting in the
//! emitted XML. Translation is single-pass: tokens are parsed by recursive
//! descent and XML fragments are written as each grammar rule is recognized,
//! with panic-mode recovery after grammar violations.

pub mod json2xml;
