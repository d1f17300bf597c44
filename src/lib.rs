#![allow(clippy::module_inception)]

use std::{fmt::Display, fs, path::Path, rc::Rc};

use log::warn;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A location in a named source: 1-based line, column as counted by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub file: Rc<String>,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: Rc<String>, line: u32, column: u32) -> Self {
        Position { file, line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} col:{}", self.file, self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` in `source`, without its line break.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders an error with a source excerpt and a caret under the offending column.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: InvalidToken (Character `@` cannot appear here)
        -> main.lang
           |
         2 | ret @
           | ----^
    */

    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };
    out.push_str(&format!("-> {}\n", position.file));

    let Some(line_text) = get_line(source, position.line) else {
        out.push_str(&format!("{}\n", error));
        return out;
    };

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // lexer columns are 1-based once the first character has been read
    let column = (position.column as usize).max(1);
    let arrows = column.saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

/// Reads `path` for an error excerpt. A failed read is logged and yields an
/// empty source, so the error is still reported without its excerpt.
pub fn read_excerpt_source(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|read_error| {
        warn!(
            "could not read {} for the error excerpt: {}",
            path.display(),
            read_error
        );
        String::new()
    })
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
