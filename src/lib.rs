#![allow(clippy::module_inception)]

use std::rc::Rc;

use colored::Colorize;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Lines of source shown on each side of the error line.
const CONTEXT_LINES: usize = 3;

/// Byte offset into a named source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text (with its newline) and
/// the offset within the line. An offset one past the end of the source
/// resolves to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    match source.split_inclusive('\n').last() {
        Some(last) if !last.ends_with('\n') => {
            Some((line_number - 1, last.to_string(), last.len()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Formats an error for the terminal.
///
/// ```text
/// Error: UnrecognisedToken
/// -> final.lc
///    |
/// 19 | let b = 2;
/// 20 > let a = #;
///    | --------^
/// 21 | f(a);
/// ```
///
/// Errors without a position, or whose position is outside `source`, get
/// the header and message only.
pub fn render_error(error: &Error, source: &str, file_name: &str) -> String {
    let header = match error.get_tip() {
        ErrorTip::None => format!("Error: {}", error.get_error_name()),
        tip => format!("Error: {} ({})", error.get_error_name(), tip),
    };
    let mut out = vec![header.red().bold().to_string()];

    let located = error
        .get_position()
        .and_then(|position| get_line_at_position(source, position.0));

    let (line, line_text, line_pos) = match located {
        Some(located) => located,
        None => {
            out.push(format!("  {}", error));
            return out.join("\n") + "\n";
        }
    };

    let lines: Vec<&str> = source.lines().collect();
    let first = line.saturating_sub(CONTEXT_LINES).max(1);
    let last = (line + CONTEXT_LINES).min(lines.len()).max(line);
    let width = last.to_string().len();
    let padding = width + 2;

    out.push(format!("-> {}", file_name));
    out.push(format!("{:>padding$}", "|"));

    for number in first..=last {
        let text = lines.get(number - 1).copied().unwrap_or("");

        if number == line {
            out.push(format!("{:>width$} {} {}", number, ">".red().bold(), text));

            let column = line_text
                .get(..line_pos)
                .map(|prefix| prefix.chars().count())
                .unwrap_or(line_pos);
            out.push(format!("{:>padding$} {}{}", "|", "-".repeat(column), "^".red()));
        } else {
            out.push(format!("{:>width$} | {}", number, text));
        }
    }

    out.join("\n") + "\n"
}

pub fn display_error(error: &Error, source: &str, file_name: &str) {
    eprint!("{}", render_error(error, source, file_name));
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    const SOURCE: &str = "Hello, world!\nsecond\n\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("ab\ncd", 5).unwrap();
        assert_eq!((line_number, line.as_str(), line_pos), (2, "cd", 2));

        let (line_number, line, _) = super::get_line_at_position(SOURCE, 34).unwrap();
        assert_eq!((line_number, line.as_str()), (5, ""));

        assert!(super::get_line_at_position(SOURCE, 35).is_none());
    }

    fn error_at(offset: u32) -> Error {
        Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "#".to_string(),
            },
            Position(offset, Rc::new("final.lc".to_string())),
        )
    }

    #[test]
    fn test_render_error_marks_column() {
        colored::control::set_override(false);

        let source = "let b = 2;\nlet a = #;\nf(a);\n";
        let rendered = super::render_error(&error_at(19), source, "final.lc");

        assert_eq!(
            rendered,
            "Error: UnrecognisedToken\n\
             -> final.lc\n  |\n\
             1 | let b = 2;\n\
             2 > let a = #;\n  | --------^\n\
             3 | f(a);\n"
        );
    }

    #[test]
    fn test_render_error_limits_context() {
        colored::control::set_override(false);

        let source: String = (1..=20).map(|n| format!("line{}\n", n)).collect();
        let offset = source.find("line10").unwrap() as u32;
        let rendered = super::render_error(&error_at(offset), &source, "long.lc");

        assert!(rendered.contains(" 7 | line7\n"));
        assert!(rendered.contains("10 > line10\n"));
        assert!(rendered.contains("13 | line13\n"));
        assert!(!rendered.contains("line6\n"));
        assert!(!rendered.contains("line14"));
    }

    #[test]
    fn test_render_unlocated_error() {
        colored::control::set_override(false);

        let error = Error::unlocated(ErrorImpl::UndefinedSymbol {
            name: "x".to_string(),
        });
        let rendered = super::render_error(&error, "", "main.lc");

        assert!(rendered.starts_with("Error: "));
        assert!(rendered.ends_with("  undefined symbol \"x\"\n"));
        assert!(!rendered.contains("->"));
    }
}
