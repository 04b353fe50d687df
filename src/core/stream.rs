//! Incremental rendering of streamed responses
//!
//! A chat response arrives in chunks. Math spans can straddle chunk
//! boundaries, so the accumulated text is re-rendered as a whole after every
//! chunk: a span whose closing delimiter has not arrived yet stays literal
//! until it does.

use super::renderer::MathRenderer;

/// Accumulates streamed chunks and renders the text received so far
#[derive(Debug, Clone)]
pub struct StreamRenderer<'r> {
    renderer: &'r MathRenderer,
    buffer: String,
}

impl<'r> StreamRenderer<'r> {
    pub fn new(renderer: &'r MathRenderer) -> Self {
        Self {
            renderer,
            buffer: String::new(),
        }
    }

    /// Append a chunk and return the rendered text so far
    pub fn push(&mut self, chunk: &str) -> String {
        self.buffer.push_str(chunk);
        self.rendered()
    }

    /// Rendered form of everything received so far
    pub fn rendered(&self) -> String {
        self.renderer.render_guarded(&self.buffer)
    }

    /// Raw text received so far
    pub fn raw(&self) -> &str {
        &self.buffer
    }

    /// Consume the stream, returning the raw and rendered text
    pub fn finish(self) -> (String, String) {
        let rendered = self.rendered();
        (self.buffer, rendered)
    }
}
