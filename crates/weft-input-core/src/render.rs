//! Render delegation.
//!
//! The controller does not draw anything. The caller supplies a renderer
//! that receives [`InputProps`] (display text, keyboard hint and a change
//! handler) and builds whatever element the UI toolkit uses.

use std::fmt;

use smol_str::SmolStr;

use crate::mode::InputMode;

/// Receiver of raw keystroke text.
///
/// Implemented by [`NumberField`](crate::NumberField) and
/// [`NumberInput`](crate::NumberInput). Returns the value reported for the
/// edit.
pub trait InputSink {
    fn handle_input(&mut self, text: &str) -> Option<f64>;
}

/// Change handler handed to a renderer.
///
/// Borrows the controller for the duration of the render call, so it suits
/// toolkits that build an element and process its events in one pass.
/// Retained-mode bindings (the DOM) keep the controller themselves and call
/// [`InputSink::handle_input`] from their own event listener.
pub struct ChangeHandler<'a> {
    sink: &'a mut dyn InputSink,
}

impl<'a> ChangeHandler<'a> {
    pub fn new(sink: &'a mut dyn InputSink) -> Self {
        Self { sink }
    }

    /// Forward the element's new text. Returns the reported value.
    pub fn fire(&mut self, text: &str) -> Option<f64> {
        self.sink.handle_input(text)
    }
}

impl fmt::Debug for ChangeHandler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeHandler").finish_non_exhaustive()
    }
}

/// Everything a renderer needs to bind an input element.
#[derive(Debug)]
pub struct InputProps<'a> {
    /// Text to display.
    pub value: SmolStr,
    /// Keyboard hint.
    pub input_mode: InputMode,
    /// Keystroke handler.
    pub on_change: ChangeHandler<'a>,
}

/// A reusable render delegate.
///
/// One-off delegates can be plain closures passed to
/// [`NumberInput::render`](crate::NumberInput::render).
pub trait InputRenderer {
    type Output;

    fn render(&self, props: InputProps<'_>) -> Self::Output;
}
