//! WASM bindings for WaveTikZ.
//!
//! This module provides JavaScript-friendly bindings for rendering timing
//! diagrams in the browser, e.g. for a live preview next to a LaTeX editor.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { render_document, render_signal } from 'wavetikz';
//!
//! await init();
//!
//! const body = render_document(`{ "signal": [
//!   { "name": "clk", "wave": "p....." },
//!   { "name": "dat", "wave": "x.=.x.", "data": ["A"] }
//! ]}`, false);
//!
//! const clk = render_signal("p.....", 0, 1);
//! ```

use wasm_bindgen::prelude::*;

use crate::diagram::{Diagram, DiagramConfig};
use crate::render::tikz;
use crate::wave::SignalSpec;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: crate::WaveError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Render a WaveDrom JSON (or YAML) document.
///
/// # Arguments
/// * `source` - The document text
/// * `standalone` - Wrap the picture in a complete LaTeX document
///
/// # Returns
/// The TikZ text, or the error message if the document does not compile.
#[wasm_bindgen]
pub fn render_document(source: &str, standalone: bool) -> Result<String, JsValue> {
    let diagram = Diagram::parse(source).map_err(to_js)?;
    diagram
        .to_tikz(&DiagramConfig::default(), standalone)
        .map_err(to_js)
}

/// Render a single unnamed wave string as a `tikzpicture`.
///
/// # Example
/// ```javascript
/// const tikz = render_signal("01.zx=", -0.5, 1);
/// ```
#[wasm_bindgen]
pub fn render_signal(wave: &str, phase: f64, period: f64) -> Result<String, JsValue> {
    let spec = SignalSpec::new(wave).with_phase(phase).with_period(period);
    Diagram::from(spec)
        .to_tikz(&DiagramConfig::new().with_gridlines(false), false)
        .map_err(to_js)
}

/// Get the TikZ macro library the rendered calls expect.
#[wasm_bindgen]
pub fn preamble() -> String {
    tikz::PREAMBLE.to_string()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
