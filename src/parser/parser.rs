//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser is a recursive-descent consumer of a token array. It keeps a
//! single cursor that starts one position before the first token; `advance`
//! is the only way input is consumed.
//!
//! Two policies decide how lenient a parse is:
//! - what happens to tokens that cannot start a statement (`UnknownTokenPolicy`)
//! - what happens when input runs out inside a construct (`TruncationPolicy`)

use std::rc::Rc;

use log::{debug, trace, warn};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_stmt;

/// Deepest chain of nested statements or types a parse descends into.
///
/// Keeps both the recursive descent and the drop of the resulting boxed tree
/// within the stack of a default thread.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Handling of tokens that cannot start a statement, such as operators,
/// brackets or identifiers outside a definition header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTokenPolicy {
    /// Skip the token and parse the next one in its place.
    #[default]
    Skip,
    /// Fail with `UnexpectedToken`.
    Reject,
}

/// Handling of input that ends inside a construct, e.g. a definition without `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Stop and return the statements completed so far.
    #[default]
    Recover,
    /// Fail with `UnexpectedEndOfInput`.
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub unknown_tokens: UnknownTokenPolicy,
    pub truncation: TruncationPolicy,
}

impl ParseOptions {
    /// Rejects unknown tokens and truncated input.
    pub fn strict() -> Self {
        ParseOptions {
            unknown_tokens: UnknownTokenPolicy::Reject,
            truncation: TruncationPolicy::Fail,
        }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the current token, -1 before the first advance
    pos: isize,
    /// The name of the source file being parsed
    file: Rc<String>,
    options: ParseOptions,
    /// Set when a parse stopped early under `TruncationPolicy::Recover`
    truncated: bool,
    /// Current number of nested `parse_stmt`/`parse_type` calls
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>, options: ParseOptions) -> Self {
        Parser {
            tokens,
            pos: -1,
            file,
            options,
            truncated: false,
            depth: 0,
        }
    }

    fn token_at(&self, index: isize) -> Option<&Token> {
        usize::try_from(index).ok().and_then(|i| self.tokens.get(i))
    }

    /// Returns the current token, or `None` once the cursor is outside the array.
    pub fn current_token(&self) -> Option<&Token> {
        self.token_at(self.pos)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Kind of the token one past the cursor, without consuming it.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.token_at(self.pos + 1).map(|token| token.kind)
    }

    /// Moves the cursor forward and returns the new current token.
    pub fn advance(&mut self) -> Option<&Token> {
        self.pos += 1;
        match self.token_at(self.pos) {
            Some(token) => trace!("next index [{}]: {}", self.pos, token),
            None => trace!("next index [{}]: past end of input", self.pos),
        }
        self.current_token()
    }

    /// Advances past a run of comment tokens at the cursor.
    pub fn skip_comments(&mut self) {
        while self.current_token_kind() == Some(TokenKind::Comment) {
            self.advance();
        }
    }

    /// Advances past a run of comment and newline tokens at the cursor.
    pub fn skip_layout(&mut self) {
        while self.current_token_kind().is_some_and(|kind| kind.is_layout()) {
            self.advance();
        }
    }

    /// Returns the current token or fails with `UnexpectedEndOfInput`.
    pub fn expect_current(&self) -> Result<&Token, Error> {
        self.current_token().ok_or_else(|| self.end_of_input())
    }

    /// Runs `parse` one nesting level deeper, failing with `NestingTooDeep`
    /// past `MAX_NESTING_DEPTH`.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub fn end_of_input(&self) -> Error {
        Error::new(ErrorImpl::UnexpectedEndOfInput, self.get_position())
    }

    /// Whether the cursor has run past the last token.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len() as isize
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn get_options(&self) -> &ParseOptions {
        &self.options
    }

    /// Position of the current token. Past the end this is the last token's position.
    pub fn get_position(&self) -> Position {
        self.current_token()
            .or_else(|| self.tokens.last())
            .map(Token::position)
            .unwrap_or_else(|| Position::new(Rc::clone(&self.file), 1, 0))
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree with default options.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the `Root` node or an Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Node, Error>) {
    parse_with_options(tokens, file, ParseOptions::default())
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// Grammar errors always abort. Running out of input inside a construct, or
/// nesting deeper than `MAX_NESTING_DEPTH`, is governed by `options.truncation`; under `Recover` the statements completed
/// so far are returned and `Parser::is_truncated` reports it.
pub fn parse_with_options(
    tokens: Vec<Token>,
    file: Rc<String>,
    options: ParseOptions,
) -> (Parser, Result<Node, Error>) {
    let mut parser = Parser::new(tokens, file, options);
    let mut statements = vec![];

    while !parser.is_exhausted() {
        match parse_stmt(&mut parser) {
            Ok(Some(stmt)) => statements.push(stmt),
            Ok(None) => break,
            Err(error) if error.is_grammar_error() => return (parser, Err(error)),
            Err(error) => match parser.options.truncation {
                TruncationPolicy::Recover => {
                    warn!("parse of {} stopped early: {}", parser.file, error);
                    parser.truncated = true;
                    break;
                }
                TruncationPolicy::Fail => return (parser, Err(error)),
            },
        }
    }

    debug!(
        "parsed {} top-level statements from {}",
        statements.len(),
        parser.file
    );

    (parser, Ok(Node::Root { statements }))
}
