//! Focalcrop WASM - WebAssembly bindings for focalcrop
//!
//! Exposes focal-point edit resolution to JavaScript/TypeScript image
//! handlers.
//!
//! # Module Structure
//!
//! - `edits` - Resolve or apply an edits object (`aspectRatio`, `focalX`, `focalY`)
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { resolve_focal_edits } from '@focalcrop/wasm';
//!
//! await init();
//!
//! const plan = resolve_focal_edits(2000, 1000, {
//!   resize: { width: 400, height: 400 },
//!   focalX: 0.7,
//!   focalY: 0.4,
//! });
//! console.log(plan.crop); // { left: 900, top: 0, width: 1000, height: 1000 }
//! ```

use std::fmt::Display;

use wasm_bindgen::prelude::*;

mod edits;
mod types;

pub use edits::{apply_focal_edits, resolve_focal_edits, JsFocalPlan, JsImageEdits, JsResize};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log a binding failure to the browser console and turn it into a JS error value.
pub(crate) fn report_error(context: &str, err: impl Display) -> JsValue {
    let message = format!("{}: {}", context, err);
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}
