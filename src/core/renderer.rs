//! The math renderer
//!
//! [`MathRenderer`] owns no mutable state: its options are fixed at
//! construction and the lookup tables are static, so a single instance can be
//! shared freely across threads. [`renderer`] hands out a lazily built
//! default instance.

use std::panic::{self, AssertUnwindSafe};

use lazy_static::lazy_static;
use tracing::{debug, trace, warn};

use super::format;
use super::options::{MathDisplay, RenderOptions};
use super::passes::PIPELINE;
use super::spans::replace_spans;

lazy_static! {
    static ref DEFAULT_RENDERER: MathRenderer = MathRenderer::default();
}

/// Shared renderer built with default options on first use
pub fn renderer() -> &'static MathRenderer {
    &DEFAULT_RENDERER
}

/// Convert LaTeX math embedded in text to Unicode for terminal display
#[derive(Debug, Clone, Default)]
pub struct MathRenderer {
    options: RenderOptions,
}

impl MathRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render every math span in `text`.
    ///
    /// Never fails: unrecognized markup degrades to literal or partially
    /// cleaned text, and text without math is returned unchanged.
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        match self.options.math_display {
            MathDisplay::Latex => text.to_string(),
            MathDisplay::Unicode => self.render_spans(text),
            MathDisplay::Both => {
                let rendered = self.render_spans(text);
                if rendered == text {
                    rendered
                } else {
                    format!("{}\n\n{}", rendered, text)
                }
            }
        }
    }

    /// Run the pass pipeline over the content of one math span
    pub fn convert_math(&self, expr: &str) -> String {
        let trimmed = expr.trim();
        if trimmed.is_empty() {
            return expr.to_string();
        }

        let matching = self.options.command_matching;
        PIPELINE.iter().fold(trimmed.to_string(), |acc, pass| {
            let next = (pass.apply)(&acc, matching);
            if next != acc {
                trace!(pass = pass.name, before = %acc, after = %next, "rewrite");
            }
            next
        })
    }

    /// Render an equation for standalone display with an optional title
    pub fn format_equation(&self, equation: &str, title: Option<&str>) -> String {
        format::format_equation(&self.render(equation), title, self.options.color)
    }

    /// Render a numbered step-by-step solution
    pub fn format_step_by_step<D, E>(&self, steps: &[(D, E)]) -> String
    where
        D: AsRef<str>,
        E: AsRef<str>,
    {
        let rendered: Vec<(&str, String)> = steps
            .iter()
            .map(|(description, equation)| (description.as_ref(), self.render(equation.as_ref())))
            .collect();
        format::format_steps(&rendered, self.options.color)
    }

    /// Render, falling back to the original text if rendering panics.
    ///
    /// This is the guard used around display code; the renderer is total, so
    /// the fallback only exists as a last line of defense.
    pub fn render_guarded(&self, text: &str) -> String {
        match panic::catch_unwind(AssertUnwindSafe(|| self.render(text))) {
            Ok(rendered) => rendered,
            Err(_) => {
                warn!(len = text.len(), "math rendering failed, showing raw text");
                text.to_string()
            }
        }
    }

    fn render_spans(&self, text: &str) -> String {
        let mut spans = 0usize;
        let result = replace_spans(text, |content, kind| {
            spans += 1;
            let rendered = self.convert_math(content);
            trace!(?kind, block = kind.is_block(), %rendered, "span");
            rendered
        });
        debug!(spans, input_len = text.len(), "rendered text");
        result
    }
}
