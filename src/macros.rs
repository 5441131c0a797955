//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token borrowing its text from the source

/// Creates a Token instance covering `$start..$end` of `$source`.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$source` - The source text the token borrows from
/// * `$start` - Byte offset of the first byte
/// * `$end` - Byte offset just past the last byte
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, source, 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $source:expr, $start:expr, $end:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: &$source[$start..$end],
            span: $crate::Span::new($start, $end),
        }
    };
}
