//! Runtime values.
//!
//! A closed sum: every consumer matches exhaustively, and there is no
//! implicit conversion between kinds outside what an operator defines.

use std::fmt;

/// A runtime value.
///
/// Equality is kind-and-content: values of different kinds are never equal,
/// numbers compare numerically (so `NaN != NaN`), strings by their characters.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

impl Value {
    /// Convenience constructor for strings.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Kind name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Nil => "nil",
        }
    }

    /// `nil` and `false` are falsy; everything else, `0` and `""` included,
    /// is truthy.
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
        }
    }
}
