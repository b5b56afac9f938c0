//! Numeral text conventions for the display and the expression trace
//!
//! The display buffer is text. Values go in and out of it through these two
//! functions so the readout always looks the same whether a number was typed
//! or computed.

/// Exponent form kicks in at or above this magnitude
const EXPONENT_UPPER: f64 = 1e21;

/// Exponent form kicks in below this (non-zero) magnitude
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a value for the display
///
/// Integral values drop the fractional part, negative zero reads `0`, and
/// very large or very small magnitudes switch to signed exponent form
/// (`1e+21`, `1.5e-7`). Everything else uses the shortest decimal text that
/// round-trips.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return format!("{value}");
    }

    let repr = format!("{value:e}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => repr,
    }
}

/// Reads the numeric value of display text
///
/// Lenient: a trailing decimal point is fine (`"3."` is 3) and trailing
/// garbage is ignored by taking the longest prefix that parses. Text with no
/// numeric prefix reads as NaN.
#[must_use]
pub fn parse_numeral(text: &str) -> f64 {
    let text = text.trim_start();
    if let Ok(value) = text.parse::<f64>() {
        return value;
    }

    (1..text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
