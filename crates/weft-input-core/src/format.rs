//! Number to text conversion for the raw buffer.
//!
//! External values are rendered the way a browser renders a JavaScript
//! number, so a buffer typed by the user (`"12"`) compares equal to the
//! text of the value it produced.

use smol_str::{SmolStr, format_smolstr};

/// Below this magnitude numbers are written in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;
/// At or above this magnitude numbers are written in exponent form.
const EXPONENT_FROM: f64 = 1e21;

/// Render a number as text.
///
/// Integral values have no fraction (`5`, not `5.0`), negative zero is `0`,
/// and very large or very small magnitudes use a signed exponent (`1e+21`).
pub fn format_number(value: f64) -> SmolStr {
    if value.is_nan() {
        return SmolStr::new_static("NaN");
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            SmolStr::new_static("Infinity")
        } else {
            SmolStr::new_static("-Infinity")
        };
    }
    if value == 0.0 {
        return SmolStr::new_static("0");
    }

    let magnitude = value.abs();
    if (EXPONENT_BELOW..EXPONENT_FROM).contains(&magnitude) {
        return format_smolstr!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format_smolstr!("{mantissa}e+{exponent}")
        }
        _ => SmolStr::from(exp),
    }
}

/// Buffer text for an external value; empty when there is none.
pub fn external_text(value: Option<f64>) -> SmolStr {
    value.map(format_number).unwrap_or_default()
}
