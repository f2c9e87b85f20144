//! DOM lookup helpers.

use wasm_bindgen::JsCast;

/// Find an `<input>` element by id.
///
/// Returns None if there is no document, no element with that id, or the
/// element is not an input.
pub fn find_input(id: &str) -> Option<web_sys::HtmlInputElement> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    match element.dyn_into::<web_sys::HtmlInputElement>() {
        Ok(input) => Some(input),
        Err(element) => {
            tracing::warn!(id, tag = %element.tag_name(), "element is not an input");
            None
        }
    }
}
