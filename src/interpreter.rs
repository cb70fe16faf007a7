/// The lexer module recognizes multi-character spans.
///
/// Describes, with `logos`, the two spans longer than one character that an
/// expression can contain: number literals and variable names. It also decides
/// which characters can start each of them.
pub mod lexer;
/// The cursor module tracks the unconsumed part of an expression.
///
/// The cursor offers lookahead and consume primitives over a whitespace-free
/// input and has no grammar knowledge of its own.
///
/// # Responsibilities
/// - Peeks at the next character without consuming it.
/// - Consumes single-character operators, number spans and variable names.
/// - Never moves backwards and never consumes partially.
pub mod cursor;
/// The evaluator module parses and computes in a single pass.
///
/// The evaluator walks the grammar with one function per precedence level and
/// folds each operator into the running result as soon as its right operand is
/// known. No syntax tree is built.
///
/// # Responsibilities
/// - Enforces precedence, left associativity and parenthesis nesting.
/// - Resolves variables through the session's store.
/// - Reports every malformed input, arithmetic fault and resolver failure.
pub mod evaluator;
/// The store module holds variable bindings.
///
/// Maps variable names to values for one session and asks a [`store::Resolver`]
/// for names it has not seen yet.
pub mod store;
/// The session module ties a store, a resolver and options together.
pub mod session;
