use crate::error::{EvalError, EvalResult};

/// Magnitude from which results are rendered in scientific notation.
pub const SCIENTIFIC_UPPER: f64 = 1e7;
/// Magnitude below which non-zero results are rendered in scientific notation.
pub const SCIENTIFIC_LOWER: f64 = 1e-3;

/// Parses a real number from text.
///
/// Surrounding whitespace is ignored, so a reply typed at a prompt can be
/// passed in directly. Anything `f64::from_str` rejects is reported as
/// [`EvalError::NumericParseFailure`] carrying the original text.
///
/// ## Errors
/// Returns `NumericParseFailure` if the text is not a valid number.
///
/// ## Example
/// ```
/// use varcalc::{error::EvalError, util::num::parse_real};
///
/// assert_eq!(parse_real("-2.5").unwrap(), -2.5);
/// assert_eq!(parse_real(" 4\n").unwrap(), 4.0);
/// assert!(matches!(parse_real("1.2.3"), Err(EvalError::NumericParseFailure { .. })));
/// ```
pub fn parse_real(text: &str) -> EvalResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| EvalError::NumericParseFailure { text: text.to_string() })
}

/// Renders a result for display.
///
/// Integral values keep one fractional digit (`-27.0`), very large or very
/// small magnitudes use scientific notation with an upper-case exponent
/// (`1.0E7`, `2.5E-4`), and non-finite values are spelled out.
///
/// ## Example
/// ```
/// use varcalc::util::num::format_real;
///
/// assert_eq!(format_real(-27.0), "-27.0");
/// assert_eq!(format_real(0.5), "0.5");
/// assert_eq!(format_real(12_500_000.0), "1.25E7");
/// assert_eq!(format_real(0.00025), "2.5E-4");
/// assert_eq!(format_real(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude) {
        return format_scientific(value);
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Writes `value` as `<mantissa>E<exponent>`, forcing a fractional digit on
/// the mantissa.
fn format_scientific(value: f64) -> String {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => rendered,
    }
}
