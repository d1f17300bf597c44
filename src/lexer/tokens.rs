use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, rc::Rc};

use crate::Position;

/// A reserved word and the characters allowed to follow it.
///
/// `None` in `followers` stands for end of input.
#[derive(Debug, Clone, Copy)]
pub struct Keyword {
    pub kind: TokenKind,
    pub value: Option<&'static str>,
    pub followers: &'static [Option<u8>],
}

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("def", Keyword {
            kind: TokenKind::Definition,
            value: None,
            followers: &[Some(b' ')],
        });
        map.insert("ret", Keyword {
            kind: TokenKind::FunctionReturn,
            value: None,
            followers: &[Some(b' '), Some(b'\n')],
        });
        map.insert("end", Keyword {
            kind: TokenKind::DefinitionEnd,
            value: None,
            followers: &[Some(b' '), Some(b'\n'), None],
        });
        map.insert("defmodule", Keyword {
            kind: TokenKind::Definition,
            value: Some("module"),
            followers: &[Some(b' '), Some(b'\n')],
        });
        map
    };
}

/// Characters that may follow an atom or a declaration literal.
pub const LITERAL_FOLLOWERS: &[Option<u8>] = &[Some(b' '), Some(b'\t'), Some(b'\n')];

/// Characters that make up operator runs.
pub const OPERATOR_CHARS: &[u8] = b"+-*/%&><\\|~!=";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Comment,

    AtomLiteral,
    DeclarationLiteral,
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,

    Operator,
    Separator,
    Accessor,
    FunctionReturn,
    FunctionArrow,

    Definition,
    DefinitionEnd,
    Newline,

    Identifier,

    RoundBracketOpen,
    RoundBracketClose,
    SquareBracketOpen,
    SquareBracketClose,
    CurlyBracketOpen,
    CurlyBracketClose,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "eof",
            TokenKind::Comment => "comment",
            TokenKind::AtomLiteral => "atom_literal",
            TokenKind::DeclarationLiteral => "declaration_literal",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::IntegerLiteral => "integer_literal",
            TokenKind::FloatLiteral => "float_literal",
            TokenKind::Operator => "operator",
            TokenKind::Separator => "separator",
            TokenKind::Accessor => "accessor",
            TokenKind::FunctionReturn => "function_return",
            TokenKind::FunctionArrow => "function_arrow",
            TokenKind::Definition => "definition",
            TokenKind::DefinitionEnd => "definition_end",
            TokenKind::Newline => "newline",
            TokenKind::Identifier => "identifier",
            TokenKind::RoundBracketOpen => "round_bracket_open",
            TokenKind::RoundBracketClose => "round_bracket_close",
            TokenKind::SquareBracketOpen => "square_bracket_open",
            TokenKind::SquareBracketClose => "square_bracket_close",
            TokenKind::CurlyBracketOpen => "curly_bracket_open",
            TokenKind::CurlyBracketClose => "curly_bracket_close",
        }
    }

    /// Newlines and comments carry layout only.
    pub fn is_layout(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Comment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub file_name: Rc<String>,
    pub line: u32,
    pub start_column: u32,
    pub end_column: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} value: \"{}\" in {}:{} col:{}-{}",
            self.kind,
            self.value.as_deref().unwrap_or("None"),
            self.file_name,
            self.line,
            self.start_column,
            self.end_column
        )
    }
}

impl Token {
    /// The payload, or the kind name for tokens that carry none.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or(self.kind.name())
    }

    pub fn position(&self) -> Position {
        Position::new(Rc::clone(&self.file_name), self.line, self.start_column)
    }
}
