//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while turning source text into an
//! AST. It includes:
//!
//! - Error structures with source position information
//! - Lexical and grammar error variants
//! - Error naming and suggestion tips used by diagnostic printing

pub mod errors;
