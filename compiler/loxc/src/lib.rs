//! One-call pipeline over the Lox stages.
//!
//! [`interpret`] runs scan, parse and evaluate in order and stops at the first
//! stage that fails, reporting it as a [`Problem`]. [`dump_tokens`] and
//! [`dump_ast`] expose the intermediate forms for debugging.

mod problem;

pub use lox_eval::Value;
pub use problem::Problem;

use lox_ir::Expr;
use std::fmt::Write;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call repeatedly; only the
/// first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Scan, parse and evaluate `source`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn interpret(source: &str) -> Result<Value, Problem> {
    let expr = parse_source(source)?;
    let value = lox_eval::evaluate(&expr)?;
    Ok(value)
}

/// Scan and parse `source`, returning the canonical print form of the tree.
pub fn dump_ast(source: &str) -> Result<String, Problem> {
    parse_source(source).map(|expr| expr.print())
}

/// Scan `source` and render one debug line per token, errors included.
///
/// Lexical errors don't stop the dump; they follow the tokens, one per line.
pub fn dump_tokens(source: &str) -> String {
    let scanned = lox_lexer::scan(source);
    let mut out = String::new();
    for token in &scanned.tokens {
        let _ = writeln!(out, "{token}");
    }
    for err in &scanned.errors {
        let _ = writeln!(out, "{}", err.to_diagnostic());
    }
    out
}

fn parse_source(source: &str) -> Result<Expr, Problem> {
    let scanned = lox_lexer::scan(source);
    if scanned.has_errors() {
        tracing::debug!(errors = scanned.errors.len(), "lexical errors, not parsing");
        return Err(Problem::Lex(scanned.errors));
    }
    Ok(lox_parse::parse(&scanned.tokens)?)
}
