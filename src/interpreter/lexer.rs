use logos::Logos;

/// A multi-character span the cursor can consume.
///
/// The lexer is never run over a whole expression. The evaluator first peeks
/// at the next character to decide which span it expects, then the cursor runs
/// a lexer over its remaining input and accepts the first lexeme only if it is
/// the expected kind. This keeps a `-` in operator position from being read as
/// the sign of a number.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// Numeric spans such as `42`, `-3.5` or `1.2.3`.
    ///
    /// One leading digit or `-`, then any run of digits and dots. Whether the
    /// span is a well-formed number is decided later, when it is converted.
    #[regex(r"[-0-9][0-9.]*")]
    Number,
    /// Variable names such as `x`, `rate2` or `скорость`.
    #[regex(r"\p{Alphabetic}[\p{Alphabetic}\p{Nd}]*")]
    Identifier,
}

/// Returns `true` if `ch` may start a numeric span.
#[must_use]
pub const fn starts_number(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '-'
}

/// Returns `true` if `ch` may start a variable name.
#[must_use]
pub fn starts_identifier(ch: char) -> bool {
    ch.is_alphabetic()
}
