use std::{
    fs::File,
    io::{BufReader, Bytes, Read},
    path::Path,
    rc::Rc,
};

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_SINGLE_CHAR_TOKEN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, LITERAL_FOLLOWERS, OPERATOR_CHARS, RESERVED_LOOKUP};

/// Character-level state machine over a byte source.
///
/// Holds one character of lookahead. `None` in `current_char` is end of input.
pub struct Lexer<R: Read> {
    source: Bytes<BufReader<R>>,
    pub(crate) current_char: Option<u8>,
    pub(crate) line: u32,
    pub(crate) column: u32,
    pub(crate) file: Rc<String>,
}

impl<R: Read> Lexer<R> {
    pub fn new(source: R, file: Option<String>) -> Lexer<R> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: BufReader::new(source).bytes(),
            // primes the first read through the space-skipping path
            current_char: Some(b' '),
            line: 1,
            column: 0,
            file: file_name,
        }
    }

    pub(crate) fn advance(&mut self) -> Result<(), Error> {
        self.current_char = match self.source.next() {
            Some(Ok(byte)) => Some(byte),
            Some(Err(error)) => {
                return Err(Error::new(
                    ErrorImpl::Io {
                        message: error.to_string(),
                    },
                    self.get_position(),
                ))
            }
            None => None,
        };
        self.column += 1;
        Ok(())
    }

    pub fn get_position(&self) -> Position {
        Position::new(Rc::clone(&self.file), self.line, self.column)
    }

    fn invalid_token(&self) -> Error {
        let token = self
            .current_char
            .map(|c| (c as char).to_string())
            .unwrap_or_default();
        Error::new(ErrorImpl::InvalidToken { token }, self.get_position())
    }

    fn expect_follower(&self, followers: &[Option<u8>]) -> Result<(), Error> {
        if followers.contains(&self.current_char) {
            Ok(())
        } else {
            Err(self.invalid_token())
        }
    }

    fn read_while(&mut self, buffer: &mut Vec<u8>, accept: fn(u8) -> bool) -> Result<(), Error> {
        while let Some(c) = self.current_char {
            if !accept(c) {
                break;
            }
            buffer.push(c);
            self.advance()?;
        }
        Ok(())
    }

    /// Scans the next token. Returns an `EOF` token once input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        while let Some(b' ' | b'\t') = self.current_char {
            self.advance()?;
        }

        let Some(c) = self.current_char else {
            return Ok(MK_TOKEN!(self, TokenKind::EOF, None, self.column));
        };

        match c {
            b'\n' => self.lex_newline(),
            b'#' => self.lex_comment(),
            b':' => self.lex_atom(),
            b'"' => self.lex_string(),
            c if c.is_ascii_alphabetic() => self.lex_word(),
            c if c.is_ascii_digit() => self.lex_number(),
            b'(' => Ok(MK_SINGLE_CHAR_TOKEN!(self, TokenKind::RoundBracketOpen, "(")),
            b')' => Ok(MK_SINGLE_CHAR_TOKEN!(self, TokenKind::RoundBracketClose, ")")),
            b'[' => Ok(MK_SINGLE_CHAR_TOKEN!(self, TokenKind::SquareBracketOpen, "[")),
            b']' => Ok(MK_SINGLE_CHAR_TOKEN!(self, TokenKind::SquareBracketClose, "]")),
            b'{' => Ok(MK_SINGLE_CHAR_TOKEN!(self, TokenKind::CurlyBracketOpen, "{")),
            b'}' => Ok(MK_SINGLE_CHAR_TOKEN!(self, TokenKind::CurlyBracketClose, "}")),
            b',' => Ok(MK_SINGLE_CHAR_TOKEN!(self, TokenKind::Separator, ",")),
            b'.' => Ok(MK_SINGLE_CHAR_TOKEN!(self, TokenKind::Accessor, ".")),
            c if OPERATOR_CHARS.contains(&c) => self.lex_operator(),
            _ => Err(self.invalid_token()),
        }
    }

    /// Merges a whitespace run containing newlines into one token at the first newline.
    fn lex_newline(&mut self) -> Result<Token, Error> {
        let line = self.line;
        let column = self.column;

        while let Some(c @ (b' ' | b'\t' | b'\n')) = self.current_char {
            if c == b'\n' {
                self.line += 1;
                self.column = 0;
            }
            self.advance()?;
        }

        Ok(MK_TOKEN!(self, TokenKind::Newline, None, line, column, column))
    }

    fn lex_comment(&mut self) -> Result<Token, Error> {
        let start = self.column;
        let mut text = Vec::new();
        self.read_while(&mut text, |c| c != b'\n')?;

        Ok(MK_TOKEN!(
            self,
            TokenKind::Comment,
            Some(String::from_utf8_lossy(&text).into_owned()),
            start
        ))
    }

    fn lex_atom(&mut self) -> Result<Token, Error> {
        let start = self.column;
        let mut text = vec![b':'];
        self.advance()?;

        if !self.current_char.is_some_and(|c| c.is_ascii_alphanumeric()) {
            return Err(self.invalid_token());
        }

        self.read_while(&mut text, is_word_char)?;
        self.expect_follower(LITERAL_FOLLOWERS)?;

        Ok(MK_TOKEN!(
            self,
            TokenKind::AtomLiteral,
            Some(String::from_utf8_lossy(&text).into_owned()),
            start
        ))
    }

    /// Keywords, declarations (`name:`) and identifiers.
    fn lex_word(&mut self) -> Result<Token, Error> {
        let start = self.column;
        let mut text = Vec::new();
        self.read_while(&mut text, is_word_char)?;
        let mut word = String::from_utf8_lossy(&text).into_owned();

        if let Some(keyword) = RESERVED_LOOKUP.get(word.as_str()) {
            self.expect_follower(keyword.followers)?;
            return Ok(MK_TOKEN!(
                self,
                keyword.kind,
                keyword.value.map(String::from),
                start
            ));
        }

        if self.current_char == Some(b':') {
            word.push(':');
            let end = self.column;
            self.advance()?;
            self.expect_follower(LITERAL_FOLLOWERS)?;
            return Ok(MK_TOKEN!(
                self,
                TokenKind::DeclarationLiteral,
                Some(word),
                start,
                end
            ));
        }

        Ok(MK_TOKEN!(self, TokenKind::Identifier, Some(word), start))
    }

    /// Digits, optionally followed by `.` and more digits. `3.` is a float.
    fn lex_number(&mut self) -> Result<Token, Error> {
        let start = self.column;
        let mut text = Vec::new();
        self.read_while(&mut text, |c| c.is_ascii_digit())?;

        let kind = if self.current_char == Some(b'.') {
            text.push(b'.');
            self.advance()?;
            self.read_while(&mut text, |c| c.is_ascii_digit())?;
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };

        Ok(MK_TOKEN!(
            self,
            kind,
            Some(String::from_utf8_lossy(&text).into_owned()),
            start
        ))
    }

    /// Reads up to a closing quote, newline or end of input and always steps
    /// past the terminator. Unterminated strings are not an error.
    fn lex_string(&mut self) -> Result<Token, Error> {
        let start = self.column;
        self.advance()?;

        let mut text = Vec::new();
        self.read_while(&mut text, |c| c != b'"' && c != b'\n')?;

        let token = MK_TOKEN!(
            self,
            TokenKind::StringLiteral,
            Some(String::from_utf8_lossy(&text).into_owned()),
            start,
            self.column + 1
        );

        if self.current_char == Some(b'\n') {
            trace!("string literal at {}:{} closed by newline", self.file, self.line);
            self.line += 1;
            self.column = 0;
        }
        self.advance()?;

        Ok(token)
    }

    fn lex_operator(&mut self) -> Result<Token, Error> {
        let start = self.column;
        let mut text = Vec::new();
        self.read_while(&mut text, |c| OPERATOR_CHARS.contains(&c))?;

        let word = String::from_utf8_lossy(&text).into_owned();
        let kind = if word == "->" {
            TokenKind::FunctionArrow
        } else {
            TokenKind::Operator
        };

        Ok(MK_TOKEN!(self, kind, Some(word), start))
    }

    /// Drives the lexer to end of input. The `EOF` token is not included.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token()?;
            if token.kind == TokenKind::EOF {
                break;
            }
            trace!("{}", token);
            tokens.push(token);
        }

        debug!("tokenized {} into {} tokens", self.file, tokens.len());
        Ok(tokens)
    }
}

fn is_word_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source.as_bytes(), file).tokenize()
}

pub fn tokenize_reader<R: Read>(reader: R, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(reader, file).tokenize()
}

/// The name tokens read from `path` are stamped with.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Tokenizes a file on disk. The file is closed before returning on every path.
pub fn tokenize_file(path: &Path) -> Result<Vec<Token>, Error> {
    let file_name = source_name(path);

    let file = File::open(path).map_err(|error| {
        Error::new(
            ErrorImpl::Io {
                message: error.to_string(),
            },
            Position::new(Rc::new(file_name.clone()), 0, 0),
        )
    })?;

    tokenize_reader(file, Some(file_name))
}
