//! Core rendering modules
//!
//! - `spans`: math delimiter detection and splicing
//! - `passes`: the per-span rewrite pipeline
//! - `renderer`: `MathRenderer` and the shared default instance
//! - `format`: equation and step-by-step presentation
//! - `stream`: incremental rendering of streamed text

pub mod format;
pub mod options;
pub mod passes;
pub mod renderer;
pub mod spans;
pub mod stream;

pub use options::{CommandMatching, MathDisplay, RenderOptions};
pub use passes::{Pass, PIPELINE};
pub use renderer::{renderer, MathRenderer};
pub use spans::{contains_math, SpanKind};
pub use stream::StreamRenderer;
