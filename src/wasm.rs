//! WASM bindings for faust
//!
//! This module provides JavaScript-accessible functions for rendering LaTeX
//! math to Unicode.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::{MathRenderer, RenderOptions};

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Build a renderer from a JS options object; missing or invalid options
/// fall back to defaults
#[cfg(feature = "wasm")]
fn renderer_from(options: JsValue) -> MathRenderer {
    let opts: RenderOptions = if options.is_undefined() || options.is_null() {
        RenderOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).unwrap_or_default()
    };
    MathRenderer::new(opts)
}

/// Render LaTeX math spans in text
///
/// # Arguments
/// * `input` - Text with `$...$`, `$$...$$` or equation blocks
/// * `options` - Optional `{ math_display, command_matching, color }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderMath")]
pub fn render_math_wasm(input: &str, options: JsValue) -> String {
    renderer_from(options).render_guarded(input)
}

/// Render a standalone equation with an optional title
///
/// # Arguments
/// * `equation` - Text with math delimiters
/// * `title` - Optional title line
/// * `options` - Optional `{ math_display, command_matching, color }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatEquation")]
pub fn format_equation_wasm(equation: &str, title: Option<String>, options: JsValue) -> String {
    renderer_from(options).format_equation(equation, title.as_deref())
}

/// Render a step-by-step solution
///
/// # Arguments
/// * `steps` - Array of `[description, equation]` pairs
/// * `options` - Optional `{ math_display, command_matching, color }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatSteps")]
pub fn format_steps_wasm(steps: JsValue, options: JsValue) -> Result<String, JsValue> {
    let steps: Vec<(String, String)> = serde_wasm_bindgen::from_value(steps)
        .map_err(|e| JsValue::from_str(&format!("Invalid steps: {}", e)))?;
    Ok(renderer_from(options).format_step_by_step(&steps))
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
