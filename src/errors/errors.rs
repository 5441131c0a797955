use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at byte {}", .span.start)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
    partial: Option<TokenKind>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
            partial: None,
        }
    }

    /// Marks `span` as a best-effort token of `kind` that was cut short by
    /// the error.
    pub fn with_partial(mut self, kind: TokenKind) -> Self {
        self.partial = Some(kind);
        self
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    /// The partial token recovered up to the failure point, if any.
    pub fn partial<'src>(&self, source: &'src str) -> Option<Token<'src>> {
        let kind = self.partial?;
        let value = source.get(self.span.range())?;
        Some(Token {
            kind,
            value,
            span: self.span,
        })
    }

    /// Offset at which scanning can continue. For lexical errors this is
    /// always past the failing character, so a caller that resumes here
    /// makes progress.
    pub fn resume_at(&self) -> usize {
        self.span.end
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::InvalidState { .. } => "InvalidState",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is never closed, did you forget a `\"`?",
            )),
            ErrorImpl::UnrecognisedCharacter { character } => {
                ErrorTip::Suggestion(format!("Unrecognised character `{}`", character.escape_debug()))
            }
            ErrorImpl::InvalidState { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("lexer cannot continue from position {position}")]
    InvalidState { position: usize },
}
