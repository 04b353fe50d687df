//! Math span detection and splicing
//!
//! Three independent patterns are applied over the whole text in sequence:
//! display `$$..$$`, then `\begin{equation}..\end{equation}`, then inline
//! `$..$`. Display math goes first so that its doubled delimiters are never
//! read as two inline spans.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// $$...$$
    static ref DISPLAY_RE: Regex = Regex::new(r"\$\$([^$]+)\$\$").unwrap();

    /// \begin{equation}...\end{equation}, across lines
    static ref EQUATION_RE: Regex =
        Regex::new(r"(?s)\\begin\{equation\}(.*?)\\end\{equation\}").unwrap();

    /// $...$
    static ref INLINE_RE: Regex = Regex::new(r"\$([^$]+)\$").unwrap();
}

/// Kind of a detected math span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Display,
    Equation,
    Inline,
}

impl SpanKind {
    /// Whether the rendered span is forced onto its own line
    pub fn is_block(self) -> bool {
        !matches!(self, SpanKind::Inline)
    }
}

/// Quick check for any math delimiter
pub fn contains_math(text: &str) -> bool {
    text.contains('$') || text.contains("\\begin{equation}")
}

/// Replace every math span in `text` with `convert(content, kind)`.
///
/// Block spans are wrapped in a leading and trailing newline. Text outside
/// the spans is copied unchanged, and unmatched delimiters stay literal.
///
/// Rendering a span can leave two stray delimiters with only text between
/// them (`$$a$b$` becomes `$ab$`), so the patterns are reapplied until a
/// round changes nothing. The result never contains a span, which makes a
/// second call a no-op.
pub fn replace_spans<F>(text: &str, mut convert: F) -> String
where
    F: FnMut(&str, SpanKind) -> String,
{
    if !contains_math(text) {
        return text.to_string();
    }

    // Every productive round drops a delimiter pair
    let max_rounds =
        text.matches('$').count() / 2 + text.matches("\\begin{equation}").count() + 1;

    let mut result = text.to_string();
    for _ in 0..max_rounds {
        let next = replace_round(&result, &mut convert);
        if next == result {
            break;
        }
        result = next;
        if !contains_math(&result) {
            break;
        }
    }
    result
}

fn replace_round<F>(text: &str, convert: &mut F) -> String
where
    F: FnMut(&str, SpanKind) -> String,
{
    let passes: [(&Regex, SpanKind); 3] = [
        (&DISPLAY_RE, SpanKind::Display),
        (&EQUATION_RE, SpanKind::Equation),
        (&INLINE_RE, SpanKind::Inline),
    ];

    let mut result = text.to_string();
    for (pattern, kind) in passes {
        result = pattern
            .replace_all(&result, |caps: &Captures| {
                let rendered = convert(&caps[1], kind);
                if kind.is_block() {
                    format!("\n{}\n", rendered)
                } else {
                    rendered
                }
            })
            .to_string();
    }
    result
}
