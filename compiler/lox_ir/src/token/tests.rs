use super::*;
use pretty_assertions::assert_eq;

#[test]
fn keyword_table_matches_exact_text() {
    assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
    assert_eq!(TokenKind::keyword("nil"), Some(TokenKind::Nil));
    assert_eq!(TokenKind::keyword("While"), None);
    assert_eq!(TokenKind::keyword("whiles"), None);
    assert_eq!(TokenKind::keyword(""), None);
}

#[test]
fn every_keyword_round_trips_through_its_name() {
    let words = [
        "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return",
        "super", "this", "true", "var", "while",
    ];
    for word in words {
        let kind = TokenKind::keyword(word);
        assert!(kind.is_some(), "{word} should be a keyword");
        assert_eq!(
            kind.map(|k| k.name().to_ascii_lowercase()),
            Some(word.to_string())
        );
    }
}

#[test]
fn display_number_has_nil_literal() {
    let tok = Token::new(TokenKind::Number, "12.5", None, 3, Span::new(0, 4));
    assert_eq!(tok.to_string(), r#"NUMBER - "12.5" - nil"#);
}

#[test]
fn display_string_shows_cooked_literal() {
    let tok = Token::new(
        TokenKind::String,
        "\"hi\"",
        Some(Literal::Str("hi".to_string())),
        1,
        Span::new(0, 4),
    );
    assert_eq!(tok.to_string(), r#"STRING - "\"hi\"" - hi"#);
}

#[test]
fn eof_has_empty_lexeme() {
    let tok = Token::eof(4, 10);
    assert!(tok.is_eof());
    assert_eq!(tok.lexeme, "");
    assert_eq!(tok.line, 4);
    assert_eq!(tok.span, Span::point(10));
    assert_eq!(tok.to_string(), r#"EOF - "" - nil"#);
}
