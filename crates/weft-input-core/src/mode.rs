//! Sanitization modes and the keyboard hint each one implies.

use std::fmt;

/// The decimal separator. Only the ASCII period is recognised.
pub const DECIMAL_POINT: char = '.';

/// How typed text is sanitized. Chosen once per input and never changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NumberMode {
    /// Digits only.
    #[default]
    Integer,
    /// Digits and a single decimal point.
    Decimal,
}

impl NumberMode {
    /// Map a `decimal: bool` configuration flag to a mode.
    pub fn from_decimal_flag(decimal: bool) -> Self {
        if decimal {
            NumberMode::Decimal
        } else {
            NumberMode::Integer
        }
    }

    pub fn is_decimal(self) -> bool {
        matches!(self, NumberMode::Decimal)
    }

    /// Keyboard hint for on-screen keyboards.
    pub fn input_mode(self) -> InputMode {
        match self {
            NumberMode::Integer => InputMode::Numeric,
            NumberMode::Decimal => InputMode::Decimal,
        }
    }

    /// Whether a character survives the stripping pass.
    ///
    /// Only ASCII digits count; other Unicode digits are stripped.
    pub fn accepts(self, c: char) -> bool {
        c.is_ascii_digit() || (self.is_decimal() && c == DECIMAL_POINT)
    }
}

/// On-screen keyboard hint, as used by the `inputmode` HTML attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputMode {
    Numeric,
    Decimal,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Numeric => "numeric",
            InputMode::Decimal => "decimal",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NumberMode> for InputMode {
    fn from(mode: NumberMode) -> Self {
        mode.input_mode()
    }
}
