#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant is terminal for the evaluation call that produced it. The
/// `Display` implementation renders the fixed message shown to the operator.
pub enum EvalError {
    /// A factor was expected but the input was exhausted.
    UnexpectedEnd,
    /// The next character starts no number, variable or parenthesized group.
    UnknownCharacter {
        /// The offending character.
        ch: char,
    },
    /// An opened `(` is not closed, or a stray `)` is left over.
    MismatchedParenthesis,
    /// The divisor is exactly zero.
    DivisionByZero,
    /// An operator outside `+ - * /` reached the arithmetic step.
    UnknownOperator {
        /// The operator character.
        op: char,
    },
    /// A number span or a resolver reply is not a valid number.
    NumericParseFailure {
        /// The text that failed to parse.
        text: String,
    },
    /// Parentheses are nested deeper than the configured limit.
    ExpressionTooComplex {
        /// The nesting limit that was exceeded.
        limit: usize,
    },
    /// The resolver could not produce a reply for a variable.
    ResolutionFailed {
        /// The variable being resolved.
        name:    String,
        /// Why the resolver failed.
        details: String,
    },
}

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    /// Returns the variant name without its payload.
    ///
    /// Useful for matching failures in tables and logs where the payload does
    /// not matter.
    ///
    /// # Example
    /// ```
    /// use varcalc::error::EvalError;
    ///
    /// assert_eq!(EvalError::UnknownCharacter { ch: '$' }.kind(), "UnknownCharacter");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnexpectedEnd => "UnexpectedEnd",
            Self::UnknownCharacter { .. } => "UnknownCharacter",
            Self::MismatchedParenthesis => "MismatchedParenthesis",
            Self::DivisionByZero => "DivisionByZero",
            Self::UnknownOperator { .. } => "UnknownOperator",
            Self::NumericParseFailure { .. } => "NumericParseFailure",
            Self::ExpressionTooComplex { .. } => "ExpressionTooComplex",
            Self::ResolutionFailed { .. } => "ResolutionFailed",
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEnd => write!(f, "Неожиданный конец выражения."),
            Self::UnknownCharacter { ch } => write!(f, "Неизвестный символ: {ch}"),
            Self::MismatchedParenthesis => write!(f, "Несоответствующая скобка."),
            Self::DivisionByZero => write!(f, "Деление на ноль."),
            Self::UnknownOperator { op } => write!(f, "Неизвестный оператор: {op}"),
            Self::NumericParseFailure { text } => {
                write!(f, "Некорректное число: \"{text}\"")
            },
            Self::ExpressionTooComplex { limit } => write!(f,
                                                           "Выражение слишком сложное: вложенность скобок больше {limit}."),
            Self::ResolutionFailed { name, details } => write!(f,
                                                               "Не удалось получить значение переменной '{name}': {details}"),
        }
    }
}

impl std::error::Error for EvalError {}
