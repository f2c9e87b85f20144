//! weft-input-core: Numeric text input logic without framework dependencies.
//!
//! This crate provides:
//! - `NumberMode` / `InputMode` - integer or decimal entry and its keyboard hint
//! - `sanitize` - keystroke text to a numeric literal plus the value it reports
//! - `reconcile` - how the raw buffer follows an externally changed value
//! - `NumberField` / `NumberInput<F>` - controllers holding the raw buffer
//! - `InputRenderer` / `InputProps` - render delegation to any UI toolkit

pub mod field;
pub mod format;
pub mod mode;
pub mod reconcile;
pub mod render;
pub mod sanitize;

pub use field::{NumberField, NumberInput};
pub use format::{external_text, format_number};
pub use mode::{DECIMAL_POINT, InputMode, NumberMode};
pub use reconcile::{Reconcile, is_mid_edit, reconcile, reconciled_buffer};
pub use render::{ChangeHandler, InputProps, InputRenderer, InputSink};
pub use sanitize::{ParseNumberError, Sanitized, parse_number, sanitize, strip};
pub use smol_str::SmolStr;
