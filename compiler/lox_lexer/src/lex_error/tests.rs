use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_prefixes_line() {
    let err = LexError::new(LexErrorKind::UnterminatedString, 2, Span::new(4, 9));
    assert_eq!(err.to_string(), "Line 2: Unterminated string.");
    assert_eq!(err.message(), "Unterminated string.");
}

#[test]
fn invalid_character_diagnostic_names_the_character() {
    let err = LexError::new(LexErrorKind::InvalidCharacter { ch: '@' }, 1, Span::new(0, 1));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.to_string(), "[line 1] Error at '@': Invalid character.");
    assert_eq!(diag.span, Some(Span::new(0, 1)));
}
