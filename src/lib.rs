#![allow(clippy::module_inception)]

use std::{fmt::Write, ops::Range};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod logger;
pub mod macros;

/// Half-open byte range `start..end` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// A 1-based line number together with the text of that line and the
/// column of the offset within it, counted in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub line_text: String,
    pub column: usize,
}

/// Finds the line containing `position`. An offset equal to the source
/// length (end of input) resolves to the end of the last line; an offset
/// inside a multi-byte char resolves to the start of that char.
pub fn get_line_at_position(source: &str, position: usize) -> Location {
    let mut pos = position.min(source.len());
    while !source.is_char_boundary(pos) {
        pos -= 1;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Location {
                line: line_number,
                line_text: line.to_string(),
                column: line[..pos - start].chars().count(),
            };
        }

        start = end;
        line_number += 1;
    }

    // `pos == source.len()`: either an empty source, or just past the final line.
    match source.rsplit_once('\n') {
        Some((_, "")) => Location {
            line: line_number,
            line_text: String::new(),
            column: 0,
        },
        Some((_, last)) => Location {
            line: line_number - 1,
            line_text: last.to_string(),
            column: last.chars().count(),
        },
        None => Location {
            line: 1,
            line_text: source.to_string(),
            column: source.chars().count(),
        },
    }
}

/// Renders `error` as a caret diagnostic:
///
/// ```text
/// Error: UnrecognisedCharacter (Unrecognised character `@`)
/// -> main.gib
///    |
/// 20 | let a = @;
///    | --------^
/// ```
pub fn render_error(error: &Error, source: &str, file_name: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_error(&mut out, error, source, file_name);
    out
}

fn write_error(out: &mut String, error: &Error, source: &str, file_name: &str) -> std::fmt::Result {
    let location = get_line_at_position(source, error.get_span().start);

    let line_string = location.line.to_string();
    let padding = line_string.len() + 2;

    match error.get_tip() {
        ErrorTip::None => writeln!(out, "Error: {}", error.get_error_name())?,
        tip => writeln!(out, "Error: {} ({})", error.get_error_name(), tip)?,
    }
    writeln!(out, "-> {}", file_name)?;
    writeln!(out, "{:>padding$}", "|")?;

    let line_text = location.line_text.trim_end_matches(['\n', '\r']);
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    let arrows = location.column.saturating_sub(removed_whitespace) + 1;
    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

/// Strips leading spaces and tabs, returning the rest and how many chars
/// were removed.
fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();
    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lexer::tokenize;

    const FILE: &str = "Hello, world!\nfoo\nbar\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let location = get_line_at_position(FILE, 10);
        assert_eq!(location.line, 1);
        assert_eq!(location.line_text, "Hello, world!\n");
        assert_eq!(location.column, 10);

        let location = get_line_at_position(FILE, 30);
        assert_eq!(location.line, 4);
        assert_eq!(location.line_text, "Testing { }\n");
        assert_eq!(location.column, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let location = get_line_at_position(FILE, FILE.len());
        assert_eq!(location.line, 5);
        assert_eq!(location.column, 0);

        let location = get_line_at_position("let x", 5);
        assert_eq!(location.line, 1);
        assert_eq!(location.line_text, "let x");
        assert_eq!(location.column, 5);

        let location = get_line_at_position("", 0);
        assert_eq!(location.line, 1);
        assert_eq!(location.column, 0);
    }

    #[test]
    fn test_span_helpers() {
        let span = Span::from(3..7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert_eq!(span.range(), 3..7);
        assert!(Span::new(7, 7).is_empty());
    }

    #[test]
    fn test_render_error() {
        let source = "let x = 1\n    let a = @;\n";
        let error = tokenize(source).unwrap_err();
        let rendered = render_error(&error, source, "main.gib");

        let expected = "\
Error: UnrecognisedCharacter (Unrecognised character `@`)
-> main.gib
  |
2 | let a = @;
  | --------^
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_get_line_counts_chars() {
        let location = get_line_at_position("ab\n\"é\" @", 8);
        assert_eq!(location.line, 2);
        assert_eq!(location.column, 4);

        // Offsets inside a multi-byte char snap back to its start.
        let location = get_line_at_position("xé", 2);
        assert_eq!(location.column, 1);
    }

    #[test]
    fn test_render_error_after_multibyte_text() {
        let source = "\"é\" @";
        let error = tokenize(source).unwrap_err();
        let rendered = render_error(&error, source, "main.gib");

        let expected = "\
Error: UnrecognisedCharacter (Unrecognised character `@`)
-> main.gib
  |
1 | \"é\" @
  | ----^
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_error_multibyte_indented() {
        let source = "  «é» #";
        let error = tokenize(source).unwrap_err();
        let rendered = render_error(&error, source, "main.gib");

        // The first unrecognised char is `«`, right after the indentation.
        assert!(rendered.ends_with("1 | «é» #\n  | ^\n"));
    }

    #[test]
    fn test_render_unterminated_string() {
        let source = "\"abc";
        let error = tokenize(source).unwrap_err();
        let rendered = render_error(&error, source, "shell");

        assert!(rendered.starts_with("Error: UnterminatedString ("));
        assert!(rendered.ends_with("  | ^\n"));
    }
}
