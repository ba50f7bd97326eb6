use super::*;
use lox_ir::{Span, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn display_at_token() {
    let token = Token::new(TokenKind::RightParen, ")", None, 3, Span::new(5, 6));
    let err = ParseError::new(ParseErrorKind::UnexpectedToken, token);
    assert_eq!(err.to_string(), "[line 3] Error at ')': Expect expression.");
    assert_eq!(err.line(), 3);
}

#[test]
fn display_at_end() {
    let err = ParseError::new(ParseErrorKind::UnclosedGroup, Token::eof(1, 6));
    assert_eq!(
        err.to_string(),
        "[line 1] Error at end: Expect ')' after expression."
    );
}

#[test]
fn diagnostic_carries_code_and_span() {
    let token = Token::new(TokenKind::Number, "2", None, 1, Span::new(2, 3));
    let err = ParseError::new(ParseErrorKind::TrailingTokens, token);
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.span, Some(Span::new(2, 3)));
    assert_eq!(
        diag.to_string(),
        "[line 1] Error at '2': Expect end of expression."
    );
}

#[test]
fn nesting_message_names_limit() {
    let err = ParseError::new(
        ParseErrorKind::NestingTooDeep { limit: 8 },
        Token::synthetic(TokenKind::LeftParen, "("),
    );
    assert_eq!(err.message(), "Expression nests deeper than 8 levels.");
    assert_eq!(err.code(), ErrorCode::E1004);
}
