//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Span;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Span::new(10, 11),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_span(), Span::new(10, 11));
    assert_eq!(error.resume_at(), 11);
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, Span::new(2, 6))
        .with_partial(TokenKind::String);

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.resume_at(), 6);

    let partial = error.partial("x \"abc").unwrap();
    assert_eq!(partial.kind, TokenKind::String);
    assert_eq!(partial.value, "\"abc");
    assert_eq!(partial.span, Span::new(2, 6));
}

#[test]
fn test_partial_is_none_without_kind() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '#' },
        Span::new(0, 1),
    );

    assert!(error.partial("#").is_none());
}

#[test]
fn test_partial_out_of_range_source() {
    let error = Error::new(ErrorImpl::UnterminatedString, Span::new(0, 10))
        .with_partial(TokenKind::String);

    assert!(error.partial("\"ab").is_none());
}

#[test]
fn test_invalid_state_error() {
    let error = Error::new(ErrorImpl::InvalidState { position: 4 }, Span::new(4, 4));

    assert_eq!(error.get_error_name(), "InvalidState");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '\u{7}' },
        Span::new(0, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unrecognised character `\\u{7}`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Span::new(8, 9),
    );
    assert_eq!(error.to_string(), "unrecognised character: '@' at byte 8");

    let error = Error::new(ErrorImpl::UnterminatedString, Span::new(0, 4));
    assert_eq!(error.to_string(), "unterminated string literal at byte 0");
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Error>();
}
