//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token stamped with the lexer's file and line
//! - `MK_SINGLE_CHAR_TOKEN!` - Consumes one character and creates its token
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance from the lexer state.
///
/// # Arguments
///
/// * `$lexer` - The lexer supplying the file name and, unless given, line and end column
/// * `$kind` - The TokenKind
/// * `$value` - The token's optional text payload
/// * `$line` - (optional) The line the token starts on
/// * `$start` - The column the token starts at
/// * `$end` - (optional) The column the token ends at
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(self, TokenKind::IntegerLiteral, Some(text), start);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($lexer:expr, $kind:expr, $value:expr, $start:expr) => {
        $crate::MK_TOKEN!($lexer, $kind, $value, $start, $lexer.column)
    };
    ($lexer:expr, $kind:expr, $value:expr, $start:expr, $end:expr) => {
        $crate::MK_TOKEN!($lexer, $kind, $value, $lexer.line, $start, $end)
    };
    ($lexer:expr, $kind:expr, $value:expr, $line:expr, $start:expr, $end:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            file_name: ::std::rc::Rc::clone(&$lexer.file),
            line: $line,
            start_column: $start,
            end_column: $end,
        }
    };
}

/// Consumes the current character and creates a token carrying it as text.
///
/// Only usable inside functions returning `Result<_, Error>`, since advancing
/// the lexer may fail on a read error.
///
/// # Example
///
/// ```ignore
/// b'(' => Ok(MK_SINGLE_CHAR_TOKEN!(self, TokenKind::RoundBracketOpen, "(")),
/// ```
#[macro_export]
macro_rules! MK_SINGLE_CHAR_TOKEN {
    ($lexer:expr, $kind:expr, $value:literal) => {{
        let start = $lexer.column;
        $lexer.advance()?;
        $crate::MK_TOKEN!($lexer, $kind, Some(String::from($value)), start)
    }};
}
