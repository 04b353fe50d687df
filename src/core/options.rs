//! Renderer options

use serde::Deserialize;

/// How rendered math is presented to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathDisplay {
    /// Replace LaTeX spans with Unicode
    #[default]
    Unicode,
    /// Return the input untouched
    Latex,
    /// Rendered text, a blank line, then the raw source
    Both,
}

/// Matching strategy for the Greek letter and operator tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandMatching {
    /// Unguarded `\name` substring replacement in table order.
    /// `\simeq` becomes `∼eq` because `sim` is listed first.
    #[default]
    Literal,
    /// Replace `\name` only when no further ASCII letter follows it
    Tokenized,
}

/// Options for the math renderer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Presentation of rendered text
    /// Default: unicode
    pub math_display: MathDisplay,

    /// Command table matching
    /// Default: literal
    pub command_matching: CommandMatching,

    /// Emit ANSI styling in `format_equation` / `format_step_by_step` headers
    /// Default: false
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            math_display: MathDisplay::Unicode,
            command_matching: CommandMatching::Literal,
            color: false,
        }
    }
}

impl RenderOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Boundary-aware command matching with colored headers
    pub fn terminal() -> Self {
        Self {
            command_matching: CommandMatching::Tokenized,
            color: true,
            ..Self::default()
        }
    }

    /// Leave LaTeX source untouched
    pub fn raw() -> Self {
        Self {
            math_display: MathDisplay::Latex,
            ..Self::default()
        }
    }
}
