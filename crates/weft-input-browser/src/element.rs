//! Binding a numeric controller to an `<input>` element.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use weft_input_core::{InputProps, InputRenderer, NumberField, NumberMode, Reconcile, SmolStr, strip};

/// Applies render props to an existing input element.
///
/// Writes the display text (only when it differs, so the caret is not
/// disturbed needlessly) and the `inputmode` attribute.
pub struct ElementBinder<'a> {
    element: &'a web_sys::HtmlInputElement,
}

impl<'a> ElementBinder<'a> {
    pub fn new(element: &'a web_sys::HtmlInputElement) -> Self {
        Self { element }
    }
}

impl InputRenderer for ElementBinder<'_> {
    type Output = ();

    fn render(&self, props: InputProps<'_>) {
        if props.value.as_str() != self.element.value() {
            self.element.set_value(&props.value);
        }
        if let Err(e) = self
            .element
            .set_attribute("inputmode", props.input_mode.as_str())
        {
            tracing::warn!("Failed to set inputmode: {:?}", e);
        }
    }
}

/// A numeric controller driving a DOM input element.
///
/// Listens for `input` events for as long as it is alive; dropping it
/// detaches the listener.
pub struct BrowserNumberInput {
    element: web_sys::HtmlInputElement,
    field: Rc<RefCell<NumberField>>,
    _listener: EventListener,
}

impl BrowserNumberInput {
    /// Take over `element`, showing `value` and reporting edits to `on_change`.
    ///
    /// `on_change` runs after the element shows the sanitized text and with
    /// no internal borrow held, so it may call [`BrowserNumberInput::set_value`].
    pub fn attach(
        element: web_sys::HtmlInputElement,
        value: Option<f64>,
        mode: NumberMode,
        mut on_change: impl FnMut(Option<f64>) + 'static,
    ) -> Self {
        let field = Rc::new(RefCell::new(NumberField::new(value, mode)));
        ElementBinder::new(&element).render(field.borrow_mut().props());

        let listener = {
            let field = field.clone();
            let target = element.clone();
            EventListener::new(&element, "input", move |_event| {
                let typed = target.value();
                let (value, text) = {
                    let mut field = field.borrow_mut();
                    let value = field.edit(&typed);
                    (value, SmolStr::from(field.raw()))
                };

                if text.as_str() != typed {
                    let caret = caret_after_strip(&target, &typed, mode);
                    target.set_value(&text);
                    if let Some(caret) = caret {
                        if let Err(e) = target.set_selection_range(caret, caret) {
                            tracing::debug!("Failed to restore caret: {:?}", e);
                        }
                    }
                }

                on_change(value);
            })
        };

        Self {
            element,
            field,
            _listener: listener,
        }
    }

    /// Feed the owner's value back in, updating the element if the buffer
    /// was replaced. See [`NumberField::set_value`].
    pub fn set_value(&self, value: Option<f64>) -> Option<Reconcile> {
        let outcome = self.field.borrow_mut().set_value(value);
        if let Some(Reconcile::Replace(text)) = &outcome {
            self.element.set_value(text);
        }
        outcome
    }

    pub fn raw(&self) -> SmolStr {
        SmolStr::from(self.field.borrow().raw())
    }

    pub fn mode(&self) -> NumberMode {
        self.field.borrow().mode()
    }

    pub fn element(&self) -> &web_sys::HtmlInputElement {
        &self.element
    }
}

/// Caret position once `typed` has been sanitized.
///
/// The caret stays after the same surviving characters it followed before.
/// Offsets are UTF-16 code units, as the DOM reports them; sanitized text is
/// ASCII, so its byte length is its UTF-16 length.
fn caret_after_strip(
    element: &web_sys::HtmlInputElement,
    typed: &str,
    mode: NumberMode,
) -> Option<u32> {
    let caret = element.selection_start().ok().flatten()?;

    let mut units = 0u32;
    let prefix_end = typed
        .char_indices()
        .find(|(_, c)| {
            let reached = units >= caret;
            units += c.len_utf16() as u32;
            reached
        })
        .map(|(i, _)| i)
        .unwrap_or(typed.len());

    Some(strip(&typed[..prefix_end], mode).len() as u32)
}
