/// Evaluation errors.
///
/// Defines every failure that can abort a single evaluation call: malformed
/// input detected while scanning, grammar violations, arithmetic faults such as
/// division by zero, and failures of the variable resolver. None of them is
/// recovered from internally; the caller decides whether to retry with a fresh
/// expression.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
