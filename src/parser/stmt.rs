use log::{debug, trace};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    parser::{Parser, UnknownTokenPolicy},
    types::parse_type,
};

/// Parses the statement starting at the next token.
///
/// Returns `Ok(None)` when input runs out before a statement starts.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Node>, Error> {
    parser.nested(parse_next_stmt)
}

fn parse_next_stmt(parser: &mut Parser) -> Result<Option<Node>, Error> {
    loop {
        parser.advance();
        parser.skip_comments();

        let Some(token) = parser.current_token().cloned() else {
            return Ok(None);
        };

        let node = match token.kind {
            TokenKind::AtomLiteral => Node::AtomLiteral {
                name: payload(&token),
            },
            TokenKind::IntegerLiteral => Node::IntegerLiteral {
                text: payload(&token),
            },
            TokenKind::FloatLiteral => Node::FloatLiteral {
                text: payload(&token),
            },
            TokenKind::StringLiteral => Node::StringLiteral {
                text: payload(&token),
            },
            TokenKind::DefinitionEnd => Node::DefinitionEnd,
            TokenKind::Definition => parse_definition(parser, token.value.as_deref())?,
            TokenKind::FunctionReturn => parse_return_stmt(parser)?,
            TokenKind::Newline | TokenKind::Comment => continue,
            TokenKind::EOF
            | TokenKind::DeclarationLiteral
            | TokenKind::Operator
            | TokenKind::Separator
            | TokenKind::Accessor
            | TokenKind::FunctionArrow
            | TokenKind::Identifier
            | TokenKind::RoundBracketOpen
            | TokenKind::RoundBracketClose
            | TokenKind::SquareBracketOpen
            | TokenKind::SquareBracketClose
            | TokenKind::CurlyBracketOpen
            | TokenKind::CurlyBracketClose => match parser.get_options().unknown_tokens {
                UnknownTokenPolicy::Skip => {
                    trace!("skipping {} at {}", token.kind, token.position());
                    continue;
                }
                UnknownTokenPolicy::Reject => {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedToken {
                            token: token.text().to_string(),
                        },
                        token.position(),
                    ))
                }
            },
        };

        return Ok(Some(node));
    }
}

fn payload(token: &Token) -> String {
    token.value.clone().unwrap_or_default()
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Node, Error> {
    match parse_stmt(parser)? {
        Some(value) => Ok(Node::FunctionReturn {
            value: Box::new(value),
        }),
        None => Err(parser.end_of_input()),
    }
}

/// Parses what follows a `def`/`defmodule` token.
///
/// `kind` is the definition token's payload: `None` for `def`, `Some("module")`
/// for `defmodule`.
pub fn parse_definition(parser: &mut Parser, kind: Option<&str>) -> Result<Node, Error> {
    parser.advance();
    let declaration = parser.expect_current()?.clone();

    if declaration.kind != TokenKind::DeclarationLiteral {
        return Err(invalid_definition(&declaration));
    }
    let name = payload(&declaration);

    if matches!(
        parser.peek_kind(),
        Some(TokenKind::Identifier | TokenKind::CurlyBracketOpen)
    ) {
        let signature = parse_type(parser)?;
        expect_newline(parser)?;
        debug!("parsing body of function {}", name);
        let body = parse_body(parser)?;

        return Ok(Node::FunctionDefinition {
            name,
            signature,
            body,
        });
    }

    let newline = expect_newline(parser)?;

    match kind {
        Some("module") => {
            debug!("parsing body of module {}", name);
            let body = parse_body(parser)?;
            Ok(Node::ModuleDefinition { name, body })
        }
        other => Err(Error::new(
            ErrorImpl::UnsupportedDefinition {
                kind: other.unwrap_or("def").to_string(),
            },
            newline.position(),
        )),
    }
}

fn invalid_definition(token: &Token) -> Error {
    Error::new(
        ErrorImpl::InvalidDefinition {
            token: token.text().to_string(),
        },
        token.position(),
    )
}

/// Consumes the newline that ends a definition header, allowing comments before it.
fn expect_newline(parser: &mut Parser) -> Result<Token, Error> {
    parser.advance();
    parser.skip_comments();
    let token = parser.expect_current()?.clone();

    if token.kind != TokenKind::Newline {
        return Err(invalid_definition(&token));
    }

    Ok(token)
}

/// Parses statements up to and including the one closing the definition.
pub fn parse_body(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    let mut body = Vec::new();

    loop {
        let Some(stmt) = parse_stmt(parser)? else {
            return Err(parser.end_of_input());
        };

        let closes = closes_body(&stmt);
        body.push(stmt);

        if closes {
            return Ok(body);
        }
    }
}

/// A statement closes a body when the last token it consumed was an `end`
/// that no nested definition claimed.
fn closes_body(stmt: &Node) -> bool {
    match stmt {
        Node::DefinitionEnd => true,
        Node::FunctionReturn { value } => closes_body(value),
        Node::Root { .. }
        | Node::AtomLiteral { .. }
        | Node::IntegerLiteral { .. }
        | Node::FloatLiteral { .. }
        | Node::StringLiteral { .. }
        | Node::ModuleDefinition { .. }
        | Node::FunctionDefinition { .. } => false,
    }
}
