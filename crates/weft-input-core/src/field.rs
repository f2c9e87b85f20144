//! Numeric input controllers.
//!
//! - `NumberField` - the raw buffer and the last seen external value
//! - `NumberInput<F>` - a `NumberField` that reports edits to its owner
//!
//! The owner holds the authoritative value. Edits flow up through the
//! owner callback; value changes flow down through `set_value`.

use std::fmt;

use smol_str::SmolStr;

use crate::format::external_text;
use crate::mode::{InputMode, NumberMode};
use crate::reconcile::{Reconcile, reconcile};
use crate::render::{ChangeHandler, InputProps, InputRenderer, InputSink};
use crate::sanitize::sanitize;

/// Controller state for one numeric input, without an owner callback.
///
/// Useful where the caller dispatches the reported value itself, e.g. when
/// the callback may re-enter the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberField {
    mode: NumberMode,
    value: Option<f64>,
    raw: SmolStr,
}

impl NumberField {
    /// Create a field showing `value`.
    pub fn new(value: Option<f64>, mode: NumberMode) -> Self {
        Self {
            mode,
            value,
            raw: external_text(value),
        }
    }

    pub fn mode(&self) -> NumberMode {
        self.mode
    }

    /// Keyboard hint; fixed for the lifetime of the field.
    pub fn input_mode(&self) -> InputMode {
        self.mode.input_mode()
    }

    /// Current raw buffer.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Last external value seen through `new` or `set_value`.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Whether the buffer holds an in-progress decimal.
    pub fn is_mid_edit(&self) -> bool {
        crate::reconcile::is_mid_edit(&self.raw)
    }

    /// Apply a keystroke: sanitize `text`, store it, and return the value
    /// the owner should receive.
    pub fn edit(&mut self, text: &str) -> Option<f64> {
        let sanitized = sanitize(text, self.mode);
        tracing::trace!(
            input = text,
            buffer = %sanitized.text,
            value = ?sanitized.value,
            "numeric input edited"
        );
        self.raw = sanitized.text;
        sanitized.value
    }

    /// Tell the field about the owner's value.
    ///
    /// Returns `None` when the value is the one already seen; the buffer is
    /// left alone then, even if it shows something else. Otherwise the
    /// buffer is reconciled and the outcome returned.
    pub fn set_value(&mut self, value: Option<f64>) -> Option<Reconcile> {
        if same_value(self.value, value) {
            return None;
        }
        self.value = value;

        let outcome = reconcile(value, &self.raw);
        match &outcome {
            Reconcile::Replace(text) => {
                tracing::trace!(buffer = %self.raw, replacement = %text, "numeric input resynced");
                self.raw = text.clone();
            }
            Reconcile::MidEdit => {
                tracing::debug!(buffer = %self.raw, value = ?value, "deferring value during decimal entry");
            }
            Reconcile::InSync => {}
        }
        Some(outcome)
    }

    /// Props for a render delegate; the change handler edits this field.
    pub fn props(&mut self) -> InputProps<'_> {
        InputProps {
            value: self.raw.clone(),
            input_mode: self.input_mode(),
            on_change: ChangeHandler::new(self),
        }
    }
}

impl InputSink for NumberField {
    fn handle_input(&mut self, text: &str) -> Option<f64> {
        self.edit(text)
    }
}

/// Identity comparison of external values. `NaN` equals itself and `0`
/// differs from `-0`.
fn same_value(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.to_bits() == b.to_bits(),
        _ => false,
    }
}

/// A numeric input bound to its owner.
///
/// Every edit calls `on_change` synchronously with the parsed value (or
/// `None`). The owner feeds its value back with [`NumberInput::set_value`].
pub struct NumberInput<F> {
    field: NumberField,
    on_change: F,
}

impl<F> NumberInput<F>
where
    F: FnMut(Option<f64>),
{
    pub fn new(value: Option<f64>, mode: NumberMode, on_change: F) -> Self {
        Self {
            field: NumberField::new(value, mode),
            on_change,
        }
    }

    /// Integer-only input (`inputmode="numeric"`).
    pub fn integer(value: Option<f64>, on_change: F) -> Self {
        Self::new(value, NumberMode::Integer, on_change)
    }

    /// Decimal input (`inputmode="decimal"`).
    pub fn decimal(value: Option<f64>, on_change: F) -> Self {
        Self::new(value, NumberMode::Decimal, on_change)
    }

    pub fn field(&self) -> &NumberField {
        &self.field
    }

    pub fn mode(&self) -> NumberMode {
        self.field.mode()
    }

    pub fn input_mode(&self) -> InputMode {
        self.field.input_mode()
    }

    pub fn raw(&self) -> &str {
        self.field.raw()
    }

    pub fn value(&self) -> Option<f64> {
        self.field.value()
    }

    /// See [`NumberField::set_value`].
    pub fn set_value(&mut self, value: Option<f64>) -> Option<Reconcile> {
        self.field.set_value(value)
    }

    /// Delegate rendering to a closure.
    pub fn render<O>(&mut self, delegate: impl FnOnce(InputProps<'_>) -> O) -> O {
        delegate(self.props())
    }

    /// Delegate rendering to a reusable renderer.
    pub fn render_with<R: InputRenderer>(&mut self, renderer: &R) -> R::Output {
        renderer.render(self.props())
    }

    fn props(&mut self) -> InputProps<'_> {
        InputProps {
            value: self.field.raw.clone(),
            input_mode: self.field.input_mode(),
            on_change: ChangeHandler::new(self),
        }
    }
}

impl<F> InputSink for NumberInput<F>
where
    F: FnMut(Option<f64>),
{
    fn handle_input(&mut self, text: &str) -> Option<f64> {
        let value = self.field.edit(text);
        (self.on_change)(value);
        value
    }
}

impl<F> fmt::Debug for NumberInput<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberInput")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}
