//! Binary and unary operators.
//!
//! The expression tree keeps the operator *token* (for its lexeme and line);
//! these enums classify that token for the evaluator.

use crate::TokenKind;

/// Binary operators, grouped by the grammar tier that produces them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Equality
    Eq,
    NotEq,

    // Comparison
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Term
    Sub,
    Add,

    // Factor
    Div,
    Mul,
}

impl BinaryOp {
    /// Classify an operator token kind. Returns `None` for kinds that are not
    /// binary operators.
    pub const fn from_token_kind(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::EqualEqual => Some(BinaryOp::Eq),
            TokenKind::BangEqual => Some(BinaryOp::NotEq),
            TokenKind::Greater => Some(BinaryOp::Gt),
            TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
            TokenKind::Less => Some(BinaryOp::Lt),
            TokenKind::LessEqual => Some(BinaryOp::LtEq),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Star => Some(BinaryOp::Mul),
            _ => None,
        }
    }

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Sub => "-",
            Self::Add => "+",
            Self::Div => "/",
            Self::Mul => "*",
        }
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical negation `!`.
    Not,
    /// Arithmetic negation `-`.
    Neg,
}

impl UnaryOp {
    pub const fn from_token_kind(kind: TokenKind) -> Option<UnaryOp> {
        match kind {
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}
