//! Keystroke sanitization and parsing.
//!
//! Typed text goes through two steps: [`strip`] reduces it to a numeric
//! literal (or an in-progress one such as `"12."`), and [`parse_number`]
//! turns that literal into the value reported to the owner. [`sanitize`]
//! runs both and absorbs parse failures into `None`.

use smol_str::SmolStr;

use crate::mode::{DECIMAL_POINT, NumberMode};

/// Why sanitized text did not produce a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNumberError {
    #[error("empty numeric text")]
    Empty,
    #[error("not a number: {0:?}")]
    NotANumber(SmolStr),
}

/// Result of sanitizing one keystroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized {
    /// The new raw buffer contents.
    pub text: SmolStr,
    /// The value to report to the owner.
    pub value: Option<f64>,
}

/// Sanitize typed text and compute the value to report.
///
/// Never fails: empty or unparsable text reports `None`.
pub fn sanitize(raw: &str, mode: NumberMode) -> Sanitized {
    let text = strip(raw, mode);
    let value = match parse_number(&text, mode) {
        Ok(value) => Some(value),
        Err(ParseNumberError::Empty) => None,
        Err(err) => {
            tracing::trace!(%err, text = %text, "numeric text did not parse");
            None
        }
    };
    Sanitized { text, value }
}

/// Drop every character the mode does not accept.
///
/// In decimal mode only the first point is kept as the separator; later
/// points are dropped so their digits join the fractional part
/// (`"1.2.3"` becomes `"1.23"`).
pub fn strip(raw: &str, mode: NumberMode) -> SmolStr {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;

    for c in raw.chars().filter(|c| mode.accepts(*c)) {
        if c == DECIMAL_POINT {
            if seen_point {
                continue;
            }
            seen_point = true;
        }
        out.push(c);
    }

    SmolStr::from(out)
}

/// Parse stripped text into a number.
///
/// Decimal mode pads a bare leading or trailing point with a zero, so
/// `".5"` is 0.5, `"5."` is 5 and `"."` is 0. Integer mode reads the
/// leading run of ASCII digits in base 10.
pub fn parse_number(text: &str, mode: NumberMode) -> Result<f64, ParseNumberError> {
    if text.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    let parsed = match mode {
        NumberMode::Decimal => {
            if text.starts_with(DECIMAL_POINT) {
                format!("0{text}").parse::<f64>()
            } else if text.ends_with(DECIMAL_POINT) {
                format!("{text}0").parse::<f64>()
            } else {
                text.parse::<f64>()
            }
        }
        NumberMode::Integer => {
            let end = text
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(text.len());
            text[..end].parse::<f64>()
        }
    };

    parsed.map_err(|_| ParseNumberError::NotANumber(SmolStr::from(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(raw: &str) -> Sanitized {
        sanitize(raw, NumberMode::Decimal)
    }

    fn integer(raw: &str) -> Sanitized {
        sanitize(raw, NumberMode::Integer)
    }

    #[test]
    fn test_integer_strips_everything_but_digits() {
        let s = integer("1,234.5-x");
        assert_eq!(s.text, "12345");
        assert_eq!(s.value, Some(12345.0));
    }

    #[test]
    fn test_integer_leading_zeros() {
        let s = integer("007");
        assert_eq!(s.text, "007");
        assert_eq!(s.value, Some(7.0));
    }

    #[test]
    fn test_minus_sign_is_stripped() {
        assert_eq!(integer("-42").value, Some(42.0));
        assert_eq!(decimal("-4.2").text, "4.2");
    }

    #[test]
    fn test_decimal_collapses_extra_points() {
        let s = decimal("1.2.3");
        assert_eq!(s.text, "1.23");
        assert_eq!(s.value, Some(1.23));

        assert_eq!(decimal("..5.").text, ".5");
        assert_eq!(decimal("1..").text, "1.");
    }

    #[test]
    fn test_decimal_strips_all_foreign_characters() {
        let s = decimal("$1a2b.5c");
        assert_eq!(s.text, "12.5");
        assert_eq!(s.value, Some(12.5));
    }

    #[test]
    fn test_point_shortcuts() {
        assert_eq!(decimal(".").value, Some(0.0));
        assert_eq!(decimal(".").text, ".");
        assert_eq!(decimal("5.").value, Some(5.0));
        assert_eq!(decimal(".5").value, Some(0.5));
    }

    #[test]
    fn test_empty_reports_none() {
        assert_eq!(integer(""), Sanitized { text: SmolStr::default(), value: None });
        assert_eq!(integer("abc").value, None);
        assert_eq!(decimal("e-").value, None);
        assert_eq!(decimal("").text, "");
    }

    #[test]
    fn test_scientific_and_locale_not_supported() {
        assert_eq!(decimal("1e5").text, "15");
        assert_eq!(decimal("1,5").text, "15");
    }

    #[test]
    fn test_parse_number_errors() {
        assert_eq!(parse_number("", NumberMode::Integer), Err(ParseNumberError::Empty));
        assert_eq!(
            parse_number("x1", NumberMode::Integer),
            Err(ParseNumberError::NotANumber(SmolStr::from("x1")))
        );
        assert!(parse_number("1.2.3", NumberMode::Decimal).is_err());
    }

    #[test]
    fn test_integer_parse_reads_leading_digits() {
        assert_eq!(parse_number("12.9", NumberMode::Integer), Ok(12.0));
    }
}
