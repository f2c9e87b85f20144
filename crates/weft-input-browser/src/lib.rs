//! Browser DOM layer for weft numeric inputs.
//!
//! Binds `weft-input-core` controllers to `<input>` elements. Assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `element`: `BrowserNumberInput` (input listener, caret restoration,
//!   value reconciliation) and `ElementBinder` (render props onto an element)
//! - `dom`: element lookup
//!
//! # Re-exports
//!
//! This crate re-exports `weft-input-core` for convenience, so consumers
//! only need to depend on `weft-input-browser`.

// Re-export core crate
pub use weft_input_core;
pub use weft_input_core::*;

pub mod dom;
pub mod element;

pub use dom::find_input;
pub use element::{BrowserNumberInput, ElementBinder};
