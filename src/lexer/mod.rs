//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a sequence of tokens for parsing. It handles:
//!
//! - Character-by-character scanning with a single character of lookahead
//! - Recognition of keywords, declarations, identifiers, literals, and operators
//! - Line and column tracking for error reporting
//! - Comments and whitespace handling, including newline merging

pub mod lexer;
pub mod tokens;
