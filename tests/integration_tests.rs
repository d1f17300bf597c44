//! Integration tests for the front end.
//!
//! These tests verify that the complete pipeline works correctly from source
//! text through tokenization and parsing into an AST.

use std::{io::Cursor, path::PathBuf, rc::Rc};

use frontend::{
    ast::{
        ast::Node,
        types::{StructField, TypeNode},
    },
    format_error,
    lexer::{
        lexer::{tokenize, tokenize_file, tokenize_reader},
        tokens::TokenKind,
    },
    parser::parser::{parse, parse_with_options, ParseOptions},
};

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("samples")
        .join(name)
}

#[test]
fn test_parse_sample_file() {
    let tokens = tokenize_file(&sample("shapes.lang")).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].file_name.as_str(), "shapes.lang");

    let (parser, ast) = parse(tokens, Rc::new("shapes.lang".to_string()));
    let ast = ast.unwrap();
    assert!(!parser.is_truncated());

    let statements = ast.get_body().unwrap();
    assert_eq!(statements.len(), 1);

    let module = &statements[0];
    assert_eq!(module.get_name(), Some("Shapes:"));

    let body = module.get_body().unwrap();
    let names: Vec<_> = body.iter().filter_map(|node| node.bare_name()).collect();
    assert_eq!(names, vec!["origin", "area", "label"]);
    assert!(body.last().unwrap().is_definition_end());

    match &body[0] {
        Node::FunctionDefinition { signature, body, .. } => {
            assert_eq!(
                signature,
                &TypeNode::StructType {
                    fields: vec![
                        StructField::new("x:", TypeNode::identifier("Float")),
                        StructField::new("y:", TypeNode::identifier("Float")),
                    ],
                }
            );
            assert_eq!(
                body[0],
                Node::FunctionReturn {
                    value: Box::new(Node::AtomLiteral {
                        name: ":zero".to_string()
                    })
                }
            );
        }
        other => panic!("expected a function definition, found {:?}", other),
    }

    match &body[1] {
        Node::FunctionDefinition { signature, .. } => {
            assert_eq!(signature.get_kind_name(), "FunctionType")
        }
        other => panic!("expected a function definition, found {:?}", other),
    }
}

#[test]
fn test_sample_file_parses_strictly() {
    let tokens = tokenize_file(&sample("shapes.lang")).unwrap();
    let (_, ast) = parse_with_options(tokens, Rc::new("shapes.lang".to_string()), ParseOptions::strict());

    assert!(ast.is_ok());
}

#[test]
fn test_tokenize_missing_file() {
    let error = tokenize_file(&sample("does_not_exist.lang")).unwrap_err();

    assert_eq!(error.get_error_name(), "Io");
    assert!(error.is_lex_error());
}

#[test]
fn test_reader_and_string_sources_agree() {
    let source = "defmodule M:\n  def f: Int -> Int\n    ret 1\n  end\nend\n";

    let from_string = tokenize(source.to_string(), Some("m.lang".to_string())).unwrap();
    let from_reader = tokenize_reader(Cursor::new(source), Some("m.lang".to_string())).unwrap();

    assert_eq!(from_string, from_reader);
}

#[test]
fn test_lex_error_is_rendered_with_source() {
    let source = "def main: Int\n  ret 1 ?\nend\n";
    let error = tokenize(source.to_string(), Some("main.lang".to_string())).unwrap_err();

    let rendered = format_error(&error, source);
    assert!(rendered.starts_with("Error: InvalidToken"));
    assert!(rendered.contains("-> main.lang"));
    assert!(rendered.contains("2 | ret 1 ?"));
    assert!(rendered.trim_end().ends_with('^'));
}

#[test]
fn test_grammar_error_is_rendered_with_source() {
    let source = "def 5\n";
    let tokens = tokenize(source.to_string(), Some("main.lang".to_string())).unwrap();
    let (_, ast) = parse(tokens, Rc::new("main.lang".to_string()));
    let error = ast.unwrap_err();

    assert!(error.is_grammar_error());
    let rendered = format_error(&error, source);
    assert!(rendered.starts_with("Error: InvalidDefinition"));
    assert!(rendered.contains("1 | def 5"));
    assert!(rendered.contains("| ----^"));
}
