//! # varcalc
//!
//! varcalc is an interactive arithmetic expression evaluator written in Rust.
//! It evaluates infix expressions built from numbers, named variables, the four
//! basic operators and parentheses in a single pass, asking for the value of
//! each variable the first time it is used and remembering it for the rest of
//! the session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalResult,
    interpreter::{
        evaluator::core::{EvalOptions, evaluate_with},
        store::{Resolver, VariableStore},
    },
};

/// Provides the error type shared by every evaluation step.
///
/// This module defines the errors that can abort an evaluation: unexpected end
/// of input, unknown characters, unbalanced parentheses, division by zero,
/// malformed numbers, excessive nesting, and resolver failures.
///
/// # Responsibilities
/// - Defines one enum covering every failure mode.
/// - Renders each failure as the fixed message shown to the operator.
/// - Integrates with `std::error::Error` for use with `?` and boxed errors.
pub mod error;
/// Orchestrates the evaluation of expressions.
///
/// This module ties together span recognition, the input cursor, the
/// single-pass evaluator, the variable store and sessions. It exposes the
/// public API for evaluating expressions.
///
/// # Responsibilities
/// - Coordinates the lexer, cursor, evaluator and store.
/// - Provides session-scoped variable bindings.
/// - Keeps all operator I/O behind the [`interpreter::store::Resolver`] trait.
pub mod interpreter;
/// General utilities for numeric text conversion.
///
/// This module parses numbers from scanned spans and operator replies, and
/// formats results for display.
pub mod util;

/// Evaluates one expression against `store`.
///
/// All whitespace is removed first, then the expression is evaluated with the
/// default options. Unbound variables are passed to `resolver` and the parsed
/// replies are bound in `store` for later calls.
///
/// # Errors
/// Returns an error if the expression is malformed, divides by zero, nests too
/// deeply, or a variable cannot be resolved.
///
/// # Examples
/// ```
/// use varcalc::{error::EvalError, evaluate, interpreter::store::VariableStore};
///
/// let mut store = VariableStore::new();
/// let mut no_variables = |name: &str| -> std::io::Result<String> {
///     panic!("unexpected prompt for {name}")
/// };
///
/// assert_eq!(evaluate("3 + 5 * (2 - 8)", &mut store, &mut no_variables), Ok(-27.0));
/// assert_eq!(evaluate("1 / 0", &mut store, &mut no_variables), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate<R>(expression: &str, store: &mut VariableStore, resolver: &mut R) -> EvalResult<f64>
    where R: Resolver + ?Sized
{
    evaluate_with(expression, store, resolver, EvalOptions::default())
}
