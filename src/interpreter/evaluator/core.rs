use log::trace;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        cursor::Cursor,
        store::{Resolver, VariableStore},
    },
};

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunable limits for an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Deepest parenthesis nesting accepted before failing with
    /// [`EvalError::ExpressionTooComplex`].
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Single-pass recursive-descent evaluator.
///
/// The evaluator never builds a syntax tree. Each grammar level reads from the
/// cursor and folds what it recognizes straight into an `f64`:
///
/// ```text
/// expression := term ( ("+" | "-") term )*
/// term       := factor ( ("*" | "/") factor )*
/// factor     := number | variable | "(" expression ")"
/// ```
///
/// Precedence follows from which level calls which; left associativity from
/// the fold loops. The call stack only grows with parenthesis nesting, which
/// is bounded by [`EvalOptions::max_depth`].
///
/// An evaluator lives for exactly one call of [`Evaluator::run`].
pub struct Evaluator<'src, 'ctx, R: Resolver + ?Sized> {
    pub(super) cursor:   Cursor<'src>,
    pub(super) store:    &'ctx mut VariableStore,
    pub(super) resolver: &'ctx mut R,
    pub(super) depth:    usize,
    pub(super) options:  EvalOptions,
}

impl<'src, 'ctx, R: Resolver + ?Sized> Evaluator<'src, 'ctx, R> {
    /// Creates an evaluator over an already whitespace-free `source`.
    pub fn new(source: &'src str,
               store: &'ctx mut VariableStore,
               resolver: &'ctx mut R,
               options: EvalOptions)
               -> Self {
        Self { cursor: Cursor::new(source),
               store,
               resolver,
               depth: 0,
               options }
    }

    /// Evaluates the whole input and returns its value.
    ///
    /// After the top-level expression returns, nothing may be left over: a
    /// stray `)` is a [`EvalError::MismatchedParenthesis`], any other character
    /// an [`EvalError::UnknownCharacter`].
    ///
    /// # Errors
    /// Returns the first error met while evaluating. Nothing is recovered and
    /// no partial result is returned.
    pub fn run(mut self) -> EvalResult<f64> {
        let value = self.parse_expression()?;

        match self.cursor.peek() {
            None => Ok(value),
            Some(')') => Err(EvalError::MismatchedParenthesis),
            Some(ch) => {
                trace!("unconsumed input at offset {}: {:?}",
                       self.cursor.position(),
                       self.cursor.remaining());
                Err(EvalError::UnknownCharacter { ch })
            },
        }
    }
}

/// Removes every whitespace character from `expression`.
///
/// Whitespace inside a number is removed too, so `"1 2"` reads as `12`.
#[must_use]
pub fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Evaluates `expression` against `store`, resolving unbound variables through
/// `resolver`.
///
/// # Errors
/// Returns an [`EvalError`] if the expression is malformed, divides by zero,
/// nests too deeply, or a variable cannot be resolved.
pub fn evaluate_with<R>(expression: &str,
                        store: &mut VariableStore,
                        resolver: &mut R,
                        options: EvalOptions)
                        -> EvalResult<f64>
    where R: Resolver + ?Sized
{
    let source = strip_whitespace(expression);
    trace!("evaluating {source:?}");
    Evaluator::new(&source, store, resolver, options).run()
}
