//! Main module for the json2xml library functionality

pub mod emitter;
pub mod lexer;
pub mod parser;
pub mod processor;
