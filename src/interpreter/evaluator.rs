/// Evaluator state and the evaluation entry point.
///
/// Holds the cursor, the variable store and the resolver for one evaluation
/// call, and checks that the whole input was consumed.
pub mod core;

/// Additive and multiplicative levels.
///
/// Implements the `+ -` and `* /` fold loops and the arithmetic applied at
/// each step.
pub mod binary;

/// Factor level.
///
/// Dispatches on the next character to numbers, variables and parenthesized
/// sub-expressions.
pub mod factor;
