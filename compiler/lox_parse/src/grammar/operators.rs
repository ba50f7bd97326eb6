//! Operator sets for each binary tier.
//!
//! A tier only ever folds tokens from its own set, which is what keeps every
//! operator token in the tree consistent with the tier that produced it.

use lox_ir::TokenKind;

pub(crate) const EQUALITY_OPS: &[TokenKind] = &[TokenKind::BangEqual, TokenKind::EqualEqual];

pub(crate) const COMPARISON_OPS: &[TokenKind] = &[
    TokenKind::Greater,
    TokenKind::GreaterEqual,
    TokenKind::Less,
    TokenKind::LessEqual,
];

pub(crate) const TERM_OPS: &[TokenKind] = &[TokenKind::Minus, TokenKind::Plus];

pub(crate) const FACTOR_OPS: &[TokenKind] = &[TokenKind::Slash, TokenKind::Star];

pub(crate) const UNARY_OPS: &[TokenKind] = &[TokenKind::Bang, TokenKind::Minus];

/// Token kinds `primary` wraps directly as a literal.
pub(crate) const LITERAL_KINDS: &[TokenKind] = &[
    TokenKind::False,
    TokenKind::True,
    TokenKind::Nil,
    TokenKind::String,
    TokenKind::Number,
];
