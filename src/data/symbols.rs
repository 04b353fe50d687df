//! LaTeX command to Unicode symbol tables
//!
//! Keys are command names without the leading backslash. The Greek and
//! operator tables are ordered: literal replacement walks them in insertion
//! order, so a shorter key listed before a longer one (`sim` before `simeq`)
//! wins on the longer command.

use phf::{phf_map, phf_ordered_map};

/// Greek letters, lower and upper case
pub static GREEK_LETTERS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "alpha" => "α",
    "beta" => "β",
    "gamma" => "γ",
    "delta" => "δ",
    "epsilon" => "ε",
    "zeta" => "ζ",
    "eta" => "η",
    "theta" => "θ",
    "iota" => "ι",
    "kappa" => "κ",
    "lambda" => "λ",
    "mu" => "μ",
    "nu" => "ν",
    "xi" => "ξ",
    "pi" => "π",
    "rho" => "ρ",
    "sigma" => "σ",
    "tau" => "τ",
    "upsilon" => "υ",
    "phi" => "φ",
    "chi" => "χ",
    "psi" => "ψ",
    "omega" => "ω",

    // Variant forms
    "varepsilon" => "ε",
    "vartheta" => "ϑ",
    "varphi" => "ϕ",
    "varrho" => "ϱ",
    "varsigma" => "ς",
    "varpi" => "ϖ",

    "Alpha" => "Α",
    "Beta" => "Β",
    "Gamma" => "Γ",
    "Delta" => "Δ",
    "Epsilon" => "Ε",
    "Zeta" => "Ζ",
    "Eta" => "Η",
    "Theta" => "Θ",
    "Iota" => "Ι",
    "Kappa" => "Κ",
    "Lambda" => "Λ",
    "Mu" => "Μ",
    "Nu" => "Ν",
    "Xi" => "Ξ",
    "Pi" => "Π",
    "Rho" => "Ρ",
    "Sigma" => "Σ",
    "Tau" => "Τ",
    "Upsilon" => "Υ",
    "Phi" => "Φ",
    "Chi" => "Χ",
    "Psi" => "Ψ",
    "Omega" => "Ω",
};

/// Operators, relations, arrows and miscellaneous math symbols
///
/// `\sqrt` is not listed here: the root pass owns it so that `\sqrt{..}`
/// keeps its argument.
pub static OPERATORS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    // Arithmetic
    "pm" => "±",
    "mp" => "∓",
    "times" => "×",
    "div" => "÷",
    "cdots" => "⋯",
    "cdot" => "·",

    // Relations
    "neq" => "≠",
    "leq" => "≤",
    "geq" => "≥",
    "ll" => "≪",
    "gg" => "≫",
    "approx" => "≈",
    "equiv" => "≡",
    "propto" => "∝",
    "sim" => "∼",
    "simeq" => "≃",
    "cong" => "≅",
    "not" => "¬",
    "neg" => "¬",

    // Calculus
    "partial" => "∂",
    "nabla" => "∇",
    "infty" => "∞",
    "int" => "∫",
    "iint" => "∬",
    "iiint" => "∭",
    "oint" => "∮",
    "sum" => "∑",
    "prod" => "∏",
    "coprod" => "∐",
    "cbrt" => "∛",
    "fourthroot" => "∜",

    // Geometry
    "angle" => "∠",
    "measuredangle" => "∡",
    "sphericalangle" => "∢",
    "perp" => "⊥",
    "parallel" => "∥",
    "nparallel" => "∦",

    // Sets
    "in" => "∈",
    "notin" => "∉",
    "ni" => "∋",
    "notni" => "∌",
    "subset" => "⊂",
    "supset" => "⊃",
    "subseteq" => "⊆",
    "supseteq" => "⊇",
    "subsetneq" => "⊊",
    "supsetneq" => "⊋",
    "cup" => "∪",
    "cap" => "∩",
    "setminus" => "∖",
    "emptyset" => "∅",
    "varnothing" => "∅",

    // Logic
    "forall" => "∀",
    "exists" => "∃",
    "nexists" => "∄",
    "therefore" => "∴",
    "because" => "∵",
    "wedge" => "∧",
    "vee" => "∨",
    "oplus" => "⊕",
    "ominus" => "⊖",
    "otimes" => "⊗",
    "oslash" => "⊘",
    "odot" => "⊙",
    "circ" => "∘",
    "langle" => "⟨",
    "rangle" => "⟩",

    // Arrows
    "to" => "→",
    "rightarrow" => "→",
    "leftarrow" => "←",
    "leftrightarrow" => "↔",
    "uparrow" => "↑",
    "downarrow" => "↓",
    "Rightarrow" => "⇒",
    "Leftarrow" => "⇐",
    "Leftrightarrow" => "⇔",
    "mapsto" => "↦",
    "longmapsto" => "⟼",

    // Dots and primes
    "ldots" => "…",
    "dots" => "…",
    "deg" => "°",
    "prime" => "′",
    "dprime" => "″",
    "tprime" => "‴",
};

/// Blackboard-bold number sets, keyed by the full `mathbb{X}` form
///
/// `mathbb{E}` deliberately shares the ℝ glyph with `mathbb{R}`. Changing it
/// is a behavior change and must update the regression test that pins it.
pub static NUMBER_SETS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "mathbb{N}" => "ℕ",
    "mathbb{Z}" => "ℤ",
    "mathbb{Q}" => "ℚ",
    "mathbb{R}" => "ℝ",
    "mathbb{C}" => "ℂ",
    "mathbb{H}" => "ℍ",
    "mathbb{P}" => "ℙ",
    "mathbb{E}" => "ℝ",
};

/// Precomposed radicals keyed by root index
pub static ROOT_SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    "3" => "∛",
    "4" => "∜",
};

/// Prefix used for roots whose index has no precomposed glyph
pub const GENERIC_ROOT: &str = "ⁿ√";

/// Look up a Greek letter by command name
#[inline]
pub fn lookup_greek(name: &str) -> Option<&'static str> {
    GREEK_LETTERS.get(name).copied()
}

/// Look up an operator symbol by command name
#[inline]
pub fn lookup_operator(name: &str) -> Option<&'static str> {
    OPERATORS.get(name).copied()
}

/// Look up a number set by its letter (`'R'` → `ℝ`)
pub fn lookup_number_set(letter: char) -> Option<&'static str> {
    NUMBER_SETS
        .get(format!("mathbb{{{}}}", letter).as_str())
        .copied()
}

/// Radical glyph for a root index, if one is precomposed
#[inline]
pub fn root_symbol(index: &str) -> Option<&'static str> {
    ROOT_SYMBOLS.get(index).copied()
}
