//! # faust
//!
//! LaTeX math to Unicode renderer for terminal display.
//!
//! Text from a chat response is scanned for `$...$`, `$$...$$` and
//! `\begin{equation}...\end{equation}` spans. Each span runs through a fixed
//! pipeline of rewrite passes (fractions, scripts, Greek letters, operators,
//! number sets, roots, limits, cleanup) and the result is spliced back into
//! the surrounding text.
//!
//! ## Features
//!
//! - **Total**: every input produces output; unknown markup degrades to text
//! - **Stateless**: static lookup tables, a shareable `MathRenderer`
//! - **Streaming**: re-render accumulated chunks as they arrive
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ```rust
//! use faust::render;
//!
//! assert_eq!(render(r"$x^2 + \frac{1}{2}$"), "x² + ½");
//! assert_eq!(render(r"$\alpha + \beta$"), "α + β");
//! assert_eq!(render("no math here"), "no math here");
//! ```
//!
//! ### Custom options
//!
//! ```rust
//! use faust::{CommandMatching, MathRenderer, RenderOptions};
//!
//! let renderer = MathRenderer::new(RenderOptions {
//!     command_matching: CommandMatching::Tokenized,
//!     ..RenderOptions::default()
//! });
//! assert_eq!(renderer.render(r"$x \notin A$"), "x ∉ A");
//! ```

/// Core rendering modules
pub mod core;

/// Data layer - static lookup tables
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types
pub use core::{
    contains_math, renderer, CommandMatching, MathDisplay, MathRenderer, RenderOptions, SpanKind,
    StreamRenderer,
};

// Re-export utilities
pub use utils::{parse_steps, Config, FaustError, FaustResult};

/// Render LaTeX math spans in `text` with the shared default renderer
pub fn render(text: &str) -> String {
    renderer().render(text)
}

/// Render with the shared renderer, falling back to `text` on an unexpected fault
pub fn render_guarded(text: &str) -> String {
    renderer().render_guarded(text)
}

/// Render a standalone equation with an optional title line
///
/// # Arguments
/// * `equation` - Text containing LaTeX math, delimiters included
/// * `title` - Optional title printed above the equation
pub fn format_equation(equation: &str, title: Option<&str>) -> String {
    renderer().format_equation(equation, title)
}

/// Render a numbered step-by-step solution
///
/// # Arguments
/// * `steps` - Ordered `(description, equation)` pairs
pub fn format_step_by_step<D, E>(steps: &[(D, E)]) -> String
where
    D: AsRef<str>,
    E: AsRef<str>,
{
    renderer().format_step_by_step(steps)
}
