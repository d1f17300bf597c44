use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Errors raised by the lexer, including failures reading the source stream.
    pub fn is_lex_error(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::InvalidToken { .. } | ErrorImpl::Io { .. }
        )
    }

    /// Errors raised because a token of a structurally required kind was missing.
    ///
    /// These always abort a parse. Running out of tokens is not one of them.
    pub fn is_grammar_error(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::InvalidDefinition { .. }
                | ErrorImpl::UnsupportedDefinition { .. }
                | ErrorImpl::FieldDeclarationExpected { .. }
                | ErrorImpl::TypeDeclarationExpected { .. }
                | ErrorImpl::UnexpectedToken { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::Io { .. } => "Io",
            ErrorImpl::InvalidDefinition { .. } => "InvalidDefinition",
            ErrorImpl::UnsupportedDefinition { .. } => "UnsupportedDefinition",
            ErrorImpl::FieldDeclarationExpected { .. } => "FieldDeclarationExpected",
            ErrorImpl::TypeDeclarationExpected { .. } => "TypeDeclarationExpected",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidToken { token } if token.is_empty() => ErrorTip::Suggestion(
                String::from("Unexpected end of input, a space or newline is required here"),
            ),
            ErrorImpl::InvalidToken { token } => ErrorTip::Suggestion(format!(
                "Character `{}` cannot appear here",
                token
            )),
            ErrorImpl::Io { .. } => ErrorTip::None,
            ErrorImpl::InvalidDefinition { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}`, expected `name:` followed by an optional type and a newline",
                token
            )),
            ErrorImpl::UnsupportedDefinition { .. } => ErrorTip::Suggestion(String::from(
                "Only `defmodule` may be declared without a type",
            )),
            ErrorImpl::FieldDeclarationExpected { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}`, struct fields are written as `name: Type`",
                token
            )),
            ErrorImpl::TypeDeclarationExpected { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}`, expected a type name or `{{`",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a statement",
                token
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "Input ended inside a definition, is an `end` missing?",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Statements and types nest at most {} levels deep",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid token: {token:?}")]
    InvalidToken { token: String },
    #[error("failed to read source: {message}")]
    Io { message: String },
    #[error("invalid definition at {token:?}")]
    InvalidDefinition { token: String },
    #[error("definition of type {kind:?} not supported yet")]
    UnsupportedDefinition { kind: String },
    #[error("field declaration expected, found {token:?}")]
    FieldDeclarationExpected { token: String },
    #[error("type declaration expected, found {token:?}")]
    TypeDeclarationExpected { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
