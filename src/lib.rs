#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    builder::state::CompilerState,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod builder;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses `source`, returning the compiler state holding the published tree.
pub fn parse_source(source: &str, file_name: &str) -> Result<CompilerState, Error> {
    let tokens = tokenize(source.to_string(), Some(file_name.to_string()))?;
    parse(tokens, Rc::new(file_name.to_string()))
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset inside that line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Renders an error against its source text.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `}`, did you miss a semicolon?)
/// -> main.def
///   |
/// 3 | return x }
///   | ---------^
/// ```
pub fn format_error(error: &Error, source: &str, file_name: &str) -> String {
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", file_name));

    // End-of-file errors point one past the last byte
    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "int main() {\n  return 1;\n}\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "int main() {\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 17).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "  return 1;\n");
        assert_eq!(line_pos, 4);

        assert!(super::get_line_at_position(source, 400).is_none());
    }

    #[test]
    fn test_format_error_points_at_column() {
        let source = "int main() {\n  return @;\n}\n";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "@".to_string(),
            },
            Position(22, Rc::new("main.def".to_string())),
        );

        let rendered = super::format_error(&error, source, "main.def");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedToken");
        assert_eq!(lines[1], "-> main.def");
        assert_eq!(lines[3], "2 | return @;");
        assert_eq!(lines[4], "  | -------^");
    }

    #[test]
    fn test_format_error_past_end_of_source() {
        let error = Error::new(ErrorImpl::MissingRoot, Position::null());
        let rendered = super::format_error(&error, "", "empty.def");

        assert_eq!(rendered.lines().count(), 2);
    }
}
