use log::trace;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{starts_identifier, starts_number},
        store::Resolver,
    },
    util::num::parse_real,
};

impl<R: Resolver + ?Sized> Evaluator<'_, '_, R> {
    /// Evaluates the tightest-binding unit: a number, a variable or a
    /// parenthesized expression.
    ///
    /// The rule is: `factor := number | variable | "(" expression ")"`
    ///
    /// A leading `-` is only accepted as the sign of a number literal, so
    /// `-2` is a factor while `-x` and `-(1)` are not.
    ///
    /// # Errors
    /// - `UnexpectedEnd` if the input is exhausted.
    /// - `NumericParseFailure` if the number span is malformed, e.g. `1.2.3`.
    /// - `MismatchedParenthesis` if a `(` is not closed.
    /// - `ExpressionTooComplex` if the nesting limit is exceeded.
    /// - `UnknownCharacter` for anything else.
    pub(super) fn parse_factor(&mut self) -> EvalResult<f64> {
        match self.cursor.peek() {
            None => Err(EvalError::UnexpectedEnd),
            Some(ch) if starts_number(ch) => parse_real(self.cursor.consume_number()),
            Some(ch) if starts_identifier(ch) => {
                let name = self.cursor.consume_identifier();
                self.store.get_or_resolve(name, &mut *self.resolver)
            },
            Some('(') => self.parse_group(),
            Some(ch) => Err(EvalError::UnknownCharacter { ch }),
        }
    }

    fn parse_group(&mut self) -> EvalResult<f64> {
        self.cursor.consume_operator();

        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(EvalError::ExpressionTooComplex { limit: self.options.max_depth });
        }
        trace!("enter group, depth {}", self.depth);

        let result = self.parse_expression()?;
        if self.cursor.peek() != Some(')') {
            return Err(EvalError::MismatchedParenthesis);
        }
        self.cursor.consume_operator();

        self.depth -= 1;
        Ok(result)
    }
}
