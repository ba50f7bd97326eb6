//! Evaluator tests, split by the module they exercise.

mod evaluate_tests;
mod unary_operators_tests;
