use log::trace;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{evaluator::core::Evaluator, store::Resolver},
};

impl<R: Resolver + ?Sized> Evaluator<'_, '_, R> {
    /// Evaluates a sum or difference of terms.
    ///
    /// Handles left-associative binary operators: `+` and `-`. Each operator is
    /// applied as soon as its right operand is known, so `a - b - c` folds as
    /// `(a - b) - c`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub(super) fn parse_expression(&mut self) -> EvalResult<f64> {
        let mut result = self.parse_term()?;
        while let Some(op @ ('+' | '-')) = self.cursor.peek() {
            self.cursor.consume_operator();
            let right = self.parse_term()?;
            result = apply_operation(result, right, op)?;
        }
        Ok(result)
    }

    /// Evaluates a product or quotient of factors.
    ///
    /// Handles left-associative binary operators: `*` and `/`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(super) fn parse_term(&mut self) -> EvalResult<f64> {
        let mut result = self.parse_factor()?;
        while let Some(op @ ('*' | '/')) = self.cursor.peek() {
            self.cursor.consume_operator();
            let right = self.parse_factor()?;
            result = apply_operation(result, right, op)?;
        }
        Ok(result)
    }
}

/// Applies one arithmetic operator.
///
/// Division fails when the divisor is exactly zero; there is no tolerance, so a
/// tiny non-zero divisor still divides. Operators outside `+ - * /` cannot come
/// from the grammar but are reported rather than ignored.
///
/// # Errors
/// - `DivisionByZero` if `op` is `/` and `right == 0.0`.
/// - `UnknownOperator` for any operator other than `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use varcalc::{error::EvalError, interpreter::evaluator::binary::apply_operation};
///
/// assert_eq!(apply_operation(10.0, 4.0, '-').unwrap(), 6.0);
/// assert_eq!(apply_operation(1.0, 0.0, '/').unwrap_err(), EvalError::DivisionByZero);
/// assert_eq!(apply_operation(2.0, 3.0, '^').unwrap_err(), EvalError::UnknownOperator { op: '^' });
/// ```
pub fn apply_operation(left: f64, right: f64, op: char) -> EvalResult<f64> {
    trace!("fold {left} {op} {right}");
    match op {
        '+' => Ok(left + right),
        '-' => Ok(left - right),
        '*' => Ok(left * right),
        '/' => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
        _ => Err(EvalError::UnknownOperator { op }),
    }
}
