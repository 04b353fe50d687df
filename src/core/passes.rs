//! Rewrite passes applied to the content of a single math span
//!
//! Every pass is a total `&str -> String` function: input it does not
//! recognize is returned verbatim. [`PIPELINE`] fixes the order.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::options::CommandMatching;
use crate::data::scripts::{lookup_fraction, to_script, ScriptKind};
use crate::data::symbols::{root_symbol, GENERIC_ROOT, GREEK_LETTERS, NUMBER_SETS, OPERATORS};

lazy_static! {
    /// \frac{num}{den}
    static ref FRAC_RE: Regex = Regex::new(r"\\frac\{([^}]+)\}\{([^}]+)\}").unwrap();

    /// ^{...} or ^x
    static ref SUPERSCRIPT_RE: Regex = Regex::new(r"\^\{([^}]+)\}|\^(.)").unwrap();

    /// _{...} or _x, with an optional limit-like operator in front
    static ref SUBSCRIPT_RE: Regex =
        Regex::new(r"(\\(?:lim|max|min|sup|inf))?_(?:\{([^}]+)\}|(.))").unwrap();

    /// \sqrt{...}
    static ref SQRT_RE: Regex = Regex::new(r"\\sqrt\{([^}]+)\}").unwrap();

    /// \sqrt[n]{...}
    static ref NTH_ROOT_RE: Regex = Regex::new(r"\\sqrt\[([^\]]+)\]\{([^}]+)\}").unwrap();

    /// \lim_{...}
    static ref LIM_RE: Regex = Regex::new(r"\\lim_\{([^}]+)\}").unwrap();

    /// `\to` or an already converted arrow, with surrounding whitespace
    static ref LIMIT_ARROW_RE: Regex = Regex::new(r"\s*(?:\\to|→)\s*").unwrap();

    /// Head of a braced limit subscript, `\inf_{` and friends
    static ref LIMIT_HEAD_RE: Regex = Regex::new(r"\\(?:lim|max|min|sup|inf)_\{").unwrap();

    /// \max_{...}, \min_{...}, \sup_{...}, \inf_{...}
    static ref LIMIT_OP_RE: Regex = Regex::new(r"\\(max|min|sup|inf)_\{([^}]+)\}").unwrap();

    /// \left( ... \right) and friends, bracket possibly escaped or already a symbol
    static ref DELIMITER_RE: Regex =
        Regex::new(r"\\(?:left|right)(\\[{}|]|[^A-Za-z\s\\])").unwrap();

    /// Font and text wrappers that unwrap to their content
    static ref WRAPPER_RE: Regex = Regex::new(
        r"\\(?:text|mathrm|mathit|mathbf|mathcal|mathsf|mathbb|boldsymbol|operatorname)\{([^}]+)\}"
    ).unwrap();

    /// Spacing commands and their fixed-width replacements
    static ref SPACING: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\\,").unwrap(), " "),
        (Regex::new(r"\\:").unwrap(), " "),
        (Regex::new(r"\\;").unwrap(), "  "),
        (Regex::new(r"\\!").unwrap(), ""),
        (Regex::new(r"\\quad").unwrap(), "    "),
        (Regex::new(r"\\qquad").unwrap(), "        "),
    ];

    /// Any command left over after the other passes
    static ref COMMAND_RE: Regex = Regex::new(r"\\([a-zA-Z]+)").unwrap();
}

/// A named rewrite step
#[derive(Clone, Copy)]
pub struct Pass {
    pub name: &'static str,
    pub apply: fn(&str, CommandMatching) -> String,
}

impl std::fmt::Debug for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pass").field("name", &self.name).finish()
    }
}

/// The transformation pipeline, in execution order
///
/// Fractions run before scripts so digit arguments are not subscripted, and
/// scripts run before the symbol tables so escaped content inside `^{..}`
/// is still literal when it is mapped.
pub static PIPELINE: [Pass; 8] = [
    Pass {
        name: "fractions",
        apply: |expr, _| convert_fractions(expr),
    },
    Pass {
        name: "scripts",
        apply: |expr, _| convert_scripts(expr),
    },
    Pass {
        name: "greek",
        apply: convert_greek,
    },
    Pass {
        name: "operators",
        apply: convert_operators,
    },
    Pass {
        name: "sets",
        apply: |expr, _| convert_sets(expr),
    },
    Pass {
        name: "roots",
        apply: |expr, _| convert_roots(expr),
    },
    Pass {
        name: "limits",
        apply: |expr, _| convert_limits(expr),
    },
    Pass {
        name: "cleanup",
        apply: |expr, _| cleanup_latex(expr),
    },
];

/// `\frac{a}{b}` → vulgar fraction glyph or `(a)/(b)`
pub fn convert_fractions(expr: &str) -> String {
    FRAC_RE
        .replace_all(expr, |caps: &Captures| {
            let num = &caps[1];
            let den = &caps[2];
            match lookup_fraction(num, den) {
                Some(glyph) => glyph.to_string(),
                None => format!("({})/({})", num, den),
            }
        })
        .to_string()
}

/// Superscripts then subscripts, mapped character by character
pub fn convert_scripts(expr: &str) -> String {
    let result = SUPERSCRIPT_RE.replace_all(expr, |caps: &Captures| {
        let content = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        to_script(content, ScriptKind::Superscript)
    });

    SUBSCRIPT_RE
        .replace_all(&result, |caps: &Captures| {
            let operator = caps.get(1).map_or("", |m| m.as_str());
            match (caps.get(2), caps.get(3)) {
                // Braced limit subscripts belong to the limits pass
                (Some(_), _) if !operator.is_empty() => caps[0].to_string(),
                (Some(m), _) | (None, Some(m)) => {
                    format!("{}{}", operator, to_script(m.as_str(), ScriptKind::Subscript))
                }
                (None, None) => caps[0].to_string(),
            }
        })
        .to_string()
}

/// `\alpha` → `α`
pub fn convert_greek(expr: &str, matching: CommandMatching) -> String {
    replace_commands(expr, &GREEK_LETTERS, matching)
}

/// `\leq` → `≤`, `\to` → `→`, ...
pub fn convert_operators(expr: &str, matching: CommandMatching) -> String {
    replace_commands(expr, &OPERATORS, matching)
}

/// `\mathbb{R}` → `ℝ`
pub fn convert_sets(expr: &str) -> String {
    let mut result = expr.to_string();
    for (latex, unicode) in NUMBER_SETS.entries() {
        result = result.replace(&format!("\\{}", latex), unicode);
    }
    result
}

/// `\sqrt{x}` → `√(x)`, `\sqrt[3]{x}` → `∛(x)`
pub fn convert_roots(expr: &str) -> String {
    let result = SQRT_RE.replace_all(expr, "√($1)");

    let result = NTH_ROOT_RE.replace_all(&result, |caps: &Captures| {
        let radical = root_symbol(&caps[1]).unwrap_or(GENERIC_ROOT);
        format!("{}({})", radical, &caps[2])
    });

    result.replace("\\sqrt", "√")
}

/// `\lim_{x \to 0}` → `lim[x→0]`, `\max_{i}` → `max[i]`
pub fn convert_limits(expr: &str) -> String {
    let result = LIM_RE.replace_all(expr, |caps: &Captures| {
        format!("lim[{}]", LIMIT_ARROW_RE.replace_all(&caps[1], "→"))
    });

    LIMIT_OP_RE.replace_all(&result, "$1[$2]").to_string()
}

/// Strip what is left of the LaTeX markup
pub fn cleanup_latex(expr: &str) -> String {
    let result = DELIMITER_RE.replace_all(expr, |caps: &Captures| {
        match &caps[1] {
            "." => String::new(),
            "\\|" => "‖".to_string(),
            bracket => bracket.trim_start_matches('\\').to_string(),
        }
    });

    let mut result = WRAPPER_RE.replace_all(&result, "$1").to_string();

    for (pattern, replacement) in SPACING.iter() {
        result = pattern.replace_all(&result, *replacement).to_string();
    }

    COMMAND_RE.replace_all(&result, "$1").to_string()
}

/// Apply a command table in table order
fn replace_commands(
    expr: &str,
    table: &phf::OrderedMap<&'static str, &'static str>,
    matching: CommandMatching,
) -> String {
    if !expr.contains('\\') {
        return expr.to_string();
    }

    match matching {
        CommandMatching::Literal => {
            // Braced limit heads stay intact for the limits pass
            let mut result = String::with_capacity(expr.len());
            let mut last = 0;
            for head in LIMIT_HEAD_RE.find_iter(expr) {
                result.push_str(&replace_literal(&expr[last..head.start()], table));
                result.push_str(head.as_str());
                last = head.end();
            }
            result.push_str(&replace_literal(&expr[last..], table));
            result
        }
        CommandMatching::Tokenized => {
            let mut result = expr.to_string();
            for (name, unicode) in table.entries() {
                result = replace_command_safe(&result, &format!("\\{}", name), unicode);
            }
            result
        }
    }
}

/// Plain substring replacement of every `\name` in the table
fn replace_literal(segment: &str, table: &phf::OrderedMap<&'static str, &'static str>) -> String {
    let mut result = segment.to_string();
    for (name, unicode) in table.entries() {
        result = result.replace(&format!("\\{}", name), unicode);
    }
    result
}

/// Replace a command only where it is not followed by another letter
fn replace_command_safe(input: &str, cmd: &str, replacement: &str) -> String {
    let mut result = String::new();
    let mut remaining = input;

    while let Some(pos) = remaining.find(cmd) {
        result.push_str(&remaining[..pos]);

        let after_cmd = &remaining[pos + cmd.len()..];
        let next_char = after_cmd.chars().next();

        if next_char.map(|c| c.is_ascii_alphabetic()).unwrap_or(false) {
            result.push_str(cmd);
        } else {
            result.push_str(replacement);
        }

        remaining = after_cmd;
    }

    result.push_str(remaining);
    result
}
