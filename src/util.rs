/// Numeric text helpers.
///
/// This module converts between the textual and numeric forms of a value:
/// turning a scanned number span or a typed variable reply into an `f64`, and
/// rendering a result the way the console driver prints it.
///
/// Parsing returns a `Result` so that malformed text is always reported and
/// never replaced by a fallback value.
pub mod num;
