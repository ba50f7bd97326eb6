use super::*;
use lox_ir::Span;
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, lexeme: &str) -> Token {
    Token::synthetic(kind, lexeme)
}

fn stream() -> Vec<Token> {
    vec![
        tok(TokenKind::Number, "1"),
        tok(TokenKind::Plus, "+"),
        Token::eof(1, 3),
    ]
}

#[test]
fn check_does_not_consume() {
    let tokens = stream();
    let cursor = Cursor::new(&tokens);
    assert!(cursor.check(TokenKind::Number));
    assert!(!cursor.check(TokenKind::Plus));
    assert_eq!(cursor.current().lexeme, "1");
}

#[test]
fn match_kinds_consumes_only_on_hit() {
    let tokens = stream();
    let mut cursor = Cursor::new(&tokens);
    assert!(!cursor.match_kinds(&[TokenKind::Plus, TokenKind::Minus]));
    assert_eq!(cursor.current().lexeme, "1");
    assert!(cursor.match_kinds(&[TokenKind::Star, TokenKind::Number]));
    assert_eq!(cursor.current().lexeme, "+");
    assert_eq!(cursor.previous().lexeme, "1");
}

#[test]
fn advance_returns_current_and_stops_at_eof() {
    let tokens = stream();
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.advance().lexeme, "1");
    assert_eq!(cursor.advance().lexeme, "+");
    assert!(cursor.is_at_end());
    assert!(cursor.advance().is_eof());
    assert!(cursor.advance().is_eof());
    assert_eq!(cursor.previous().lexeme, "+");
}

#[test]
fn check_is_false_at_end_even_for_eof() {
    let tokens = vec![Token::eof(1, 0)];
    let cursor = Cursor::new(&tokens);
    assert!(cursor.is_at_end());
    assert!(!cursor.check(TokenKind::Eof));
}

#[test]
fn empty_sequence_acts_as_eof() {
    let mut cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert!(cursor.advance().is_eof());
    assert_eq!(cursor.current().line, 1);
}

#[test]
fn missing_eof_is_synthesized_after_last_token() {
    let tokens = vec![Token::new(TokenKind::Number, "7", None, 4, Span::new(10, 11))];
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current().line, 4);
    assert_eq!(cursor.current().span, Span::point(11));
}
