use crate::{
    ast::types::{StructField, TypeNode},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses the type expression starting at the next token.
///
/// `->` is right associative: `A -> B -> C` is `A -> (B -> C)`. On return the
/// cursor rests on the last token of the type.
pub fn parse_type(parser: &mut Parser) -> Result<TypeNode, Error> {
    parser.nested(parse_next_type)
}

fn parse_next_type(parser: &mut Parser) -> Result<TypeNode, Error> {
    parser.advance();
    let token = parser.expect_current()?.clone();

    match token.kind {
        TokenKind::Identifier => {
            let identifier = TypeNode::identifier(token.value.unwrap_or_default());
            parse_function_type(parser, identifier)
        }
        TokenKind::CurlyBracketOpen => {
            let struct_type = parse_struct_type(parser)?;
            parse_function_type(parser, struct_type)
        }
        _ => Err(Error::new(
            ErrorImpl::TypeDeclarationExpected {
                token: token.text().to_string(),
            },
            token.position(),
        )),
    }
}

/// Wraps `argument` into a function type if an arrow follows it.
fn parse_function_type(parser: &mut Parser, argument: TypeNode) -> Result<TypeNode, Error> {
    if parser.peek_kind() != Some(TokenKind::FunctionArrow) {
        return Ok(argument);
    }

    parser.advance();
    let result = parse_type(parser)?;

    Ok(TypeNode::function(argument, result))
}

/// Parses `name: Type` fields up to the closing brace. The cursor starts on `{`.
fn parse_struct_type(parser: &mut Parser) -> Result<TypeNode, Error> {
    let mut fields = Vec::new();

    loop {
        parser.advance();
        parser.skip_layout();
        let token = parser.expect_current()?.clone();

        match token.kind {
            TokenKind::CurlyBracketClose => break,
            TokenKind::DeclarationLiteral => {
                let field_type = parse_type(parser)?;
                fields.push(StructField::new(token.value.unwrap_or_default(), field_type));
            }
            _ => {
                return Err(Error::new(
                    ErrorImpl::FieldDeclarationExpected {
                        token: token.text().to_string(),
                    },
                    token.position(),
                ))
            }
        }
    }

    Ok(TypeNode::StructType { fields })
}
