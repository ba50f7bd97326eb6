//! Expression grammar.
//!
//! Six tiers, lowest to highest binding power:
//!
//! ```text
//! expression -> equality
//! equality   -> comparison ( ( "!=" | "==" ) comparison )*
//! comparison -> term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       -> factor ( ( "-" | "+" ) factor )*
//! factor     -> unary ( ( "/" | "*" ) unary )*
//! unary      -> ( "!" | "-" ) unary | primary
//! primary    -> "false" | "true" | "nil" | STRING | NUMBER | "(" expression ")"
//! ```
//!
//! Binary tiers loop and fold to the left, so `1 - 2 - 3` is `(1 - 2) - 3`.
//! Unary recurses, so `!!x` is `!(!x)`.

mod operators;

use lox_ir::{Expr, TokenKind};
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};
use operators::{
    COMPARISON_OPS, EQUALITY_OPS, FACTOR_OPS, LITERAL_KINDS, TERM_OPS, UNARY_OPS,
};

impl Parser<'_> {
    /// Parse one expression, leaving the cursor on the token after it.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_equality()
    }

    /// Parse `operand ( op operand )*` for one binary tier.
    fn parse_left_assoc(
        &mut self,
        ops: &[TokenKind],
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut expr = operand(self)?;

        while self.match_kinds(ops) {
            let operator = self.previous().clone();
            let right = operand(self)?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// Parse `==` and `!=`.
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(EQUALITY_OPS, Self::parse_comparison)
    }

    /// Parse `>`, `>=`, `<`, `<=`.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(COMPARISON_OPS, Self::parse_term)
    }

    /// Parse `-` and `+`.
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(TERM_OPS, Self::parse_factor)
    }

    /// Parse `/` and `*`.
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(FACTOR_OPS, Self::parse_unary)
    }

    /// Parse prefix `!` and `-`. Right-associative through recursion.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kinds(UNARY_OPS) {
            let operator = self.previous().clone();
            let operand = self.nested(Self::parse_unary)?;
            return Ok(Expr::unary(operator, operand));
        }

        self.parse_primary()
    }

    /// Parse a literal or a parenthesized expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kinds(LITERAL_KINDS) {
            trace!(lexeme = %self.previous().lexeme, "parse_primary -> literal");
            return Ok(Expr::literal(self.previous().clone()));
        }

        if self.match_kinds(&[TokenKind::LeftParen]) {
            trace!("parse_primary -> grouping");
            let inner = self.nested(Self::parse_expression)?;
            if !self.match_kinds(&[TokenKind::RightParen]) {
                return Err(self.error_at_current(ParseErrorKind::UnclosedGroup));
            }
            return Ok(Expr::grouping(inner));
        }

        Err(self.error_at_current(ParseErrorKind::UnexpectedToken))
    }
}
