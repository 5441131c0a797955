use std::{borrow::Cow, fmt::Display};

use crate::Span;

use super::escapes::unescape;

/// Every keyword spelling, in the order the keyword trie is built from.
pub const KEYWORDS: [(&str, TokenKind); 18] = [
    ("fn", TokenKind::Fn),
    ("struct", TokenKind::Struct),
    ("enum", TokenKind::Enum),
    ("impl", TokenKind::Impl),
    ("trait", TokenKind::Trait),
    ("for", TokenKind::For),
    ("let", TokenKind::Let),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("match", TokenKind::Match),
    ("use", TokenKind::Use),
    ("while", TokenKind::While),
    ("in", TokenKind::In),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
];

/// One-byte punctuation and operators. `/` is absent: it needs one byte of
/// lookahead to tell it apart from a comment.
pub fn single_char_kind(byte: u8) -> Option<TokenKind> {
    let kind = match byte {
        b'(' => TokenKind::OpenParen,
        b')' => TokenKind::CloseParen,
        b'{' => TokenKind::OpenCurly,
        b'}' => TokenKind::CloseCurly,
        b'[' => TokenKind::OpenBracket,
        b']' => TokenKind::CloseBracket,
        b',' => TokenKind::Comma,
        b'.' => TokenKind::Dot,
        b':' => TokenKind::Colon,
        b';' => TokenKind::Semicolon,
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Dash,
        b'*' => TokenKind::Star,
        b'%' => TokenKind::Percent,
        b'=' => TokenKind::Assignment,
        _ => return None,
    };
    Some(kind)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Number,
    String,
    Comment,
    Whitespace,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Comma,
    Dot,
    Colon,
    Semicolon,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Assignment, // =

    // Reserved
    Fn,
    Struct,
    Enum,
    Impl,
    Trait,
    For,
    Let,
    If,
    Else,
    Return,
    True,
    False,
    Match,
    Use,
    While,
    In,
    Break,
    Continue,
}

/// Coarse node category a token falls into in the flat giblang grammar.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SyntaxClass {
    Identifier,
    Number,
    String,
    Comment,
    Whitespace,
    Keyword,
    Punctuation,
    Op,
    End,
}

impl SyntaxClass {
    pub fn name(&self) -> &'static str {
        match self {
            SyntaxClass::Identifier => "identifier",
            SyntaxClass::Number => "number",
            SyntaxClass::String => "string",
            SyntaxClass::Comment => "comment",
            SyntaxClass::Whitespace => "whitespace",
            SyntaxClass::Keyword => "keyword",
            SyntaxClass::Punctuation => "punctuation",
            SyntaxClass::Op => "op",
            SyntaxClass::End => "end",
        }
    }
}

impl Display for SyntaxClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl TokenKind {
    pub fn class(&self) -> SyntaxClass {
        use TokenKind::*;
        match self {
            EOF => SyntaxClass::End,
            Identifier => SyntaxClass::Identifier,
            Number => SyntaxClass::Number,
            String => SyntaxClass::String,
            Comment => SyntaxClass::Comment,
            Whitespace => SyntaxClass::Whitespace,
            OpenParen | CloseParen | OpenCurly | CloseCurly | OpenBracket | CloseBracket
            | Comma | Dot | Colon | Semicolon => SyntaxClass::Punctuation,
            Plus | Dash | Star | Slash | Percent | Assignment => SyntaxClass::Op,
            Fn | Struct | Enum | Impl | Trait | For | Let | If | Else | Return | True | False
            | Match | Use | While | In | Break | Continue => SyntaxClass::Keyword,
        }
    }

    /// The fixed spelling of keyword, punctuation and operator kinds.
    pub fn literal(&self) -> Option<&'static str> {
        use TokenKind::*;
        let literal = match self {
            EOF | Identifier | Number | String | Comment | Whitespace => return None,
            OpenParen => "(",
            CloseParen => ")",
            OpenCurly => "{",
            CloseCurly => "}",
            OpenBracket => "[",
            CloseBracket => "]",
            Comma => ",",
            Dot => ".",
            Colon => ":",
            Semicolon => ";",
            Plus => "+",
            Dash => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",
            Assignment => "=",
            keyword => {
                return KEYWORDS
                    .iter()
                    .find(|(_, kind)| kind == keyword)
                    .map(|(spelling, _)| *spelling)
            }
        };
        Some(literal)
    }

    pub fn is_keyword(&self) -> bool {
        self.class() == SyntaxClass::Keyword
    }

    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified slice of the input. `value` is exactly
/// `&source[span.start..span.end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: &'src str,
    pub span: Span,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?}, {}..{})", self.kind, self.value, self.span.start, self.span.end)
    }
}

impl<'src> Token<'src> {
    pub fn class(&self) -> SyntaxClass {
        self.kind.class()
    }

    /// Decoded contents of a string token, without the surrounding quotes.
    pub fn unescape(&self) -> Option<Cow<'src, str>> {
        if self.kind != TokenKind::String {
            return None;
        }

        let inner = self.value.strip_prefix('"').unwrap_or(self.value);
        let inner = match inner.strip_suffix('"') {
            // A trailing `\"` is an escaped quote, not the terminator.
            Some(stripped) if !ends_in_escape(stripped) => stripped,
            _ => inner,
        };

        Some(unescape(inner))
    }
}

fn ends_in_escape(text: &str) -> bool {
    let backslashes = text.bytes().rev().take_while(|b| *b == b'\\').count();
    backslashes % 2 == 1
}
