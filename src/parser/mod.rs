//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! sequence of tokens into an Abstract Syntax Tree. It handles:
//!
//! - Statement dispatch (literals, returns, definition ends)
//! - Definition headers for functions and modules, and their bodies
//! - Type expressions: names, struct types and right-associative function types
//! - Configurable leniency for unknown tokens and truncated input

pub mod parser;
pub mod stmt;
pub mod types;
