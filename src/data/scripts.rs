//! Superscript, subscript and vulgar fraction tables

use phf::phf_map;

/// ASCII to Unicode superscript
pub static SUPERSCRIPTS: phf::Map<char, char> = phf_map! {
    '0' => '⁰',
    '1' => '¹',
    '2' => '²',
    '3' => '³',
    '4' => '⁴',
    '5' => '⁵',
    '6' => '⁶',
    '7' => '⁷',
    '8' => '⁸',
    '9' => '⁹',
    '+' => '⁺',
    '-' => '⁻',
    '=' => '⁼',
    '(' => '⁽',
    ')' => '⁾',
    'n' => 'ⁿ',
    'i' => 'ⁱ',
    'x' => 'ˣ',
};

/// ASCII to Unicode subscript
pub static SUBSCRIPTS: phf::Map<char, char> = phf_map! {
    '0' => '₀',
    '1' => '₁',
    '2' => '₂',
    '3' => '₃',
    '4' => '₄',
    '5' => '₅',
    '6' => '₆',
    '7' => '₇',
    '8' => '₈',
    '9' => '₉',
    '+' => '₊',
    '-' => '₋',
    '=' => '₌',
    '(' => '₍',
    ')' => '₎',
    'a' => 'ₐ',
    'e' => 'ₑ',
    'h' => 'ₕ',
    'i' => 'ᵢ',
    'j' => 'ⱼ',
    'k' => 'ₖ',
    'l' => 'ₗ',
    'm' => 'ₘ',
    'n' => 'ₙ',
    'o' => 'ₒ',
    'p' => 'ₚ',
    'r' => 'ᵣ',
    's' => 'ₛ',
    't' => 'ₜ',
    'u' => 'ᵤ',
    'v' => 'ᵥ',
    'x' => 'ₓ',
};

/// Precomposed vulgar fractions as (numerator, denominator, glyph)
pub static FRACTIONS: &[(&str, &str, &str)] = &[
    ("1", "2", "½"),
    ("1", "3", "⅓"),
    ("2", "3", "⅔"),
    ("1", "4", "¼"),
    ("3", "4", "¾"),
    ("1", "5", "⅕"),
    ("2", "5", "⅖"),
    ("3", "5", "⅗"),
    ("4", "5", "⅘"),
    ("1", "6", "⅙"),
    ("5", "6", "⅚"),
    ("1", "7", "⅐"),
    ("1", "8", "⅛"),
    ("3", "8", "⅜"),
    ("5", "8", "⅝"),
    ("7", "8", "⅞"),
    ("1", "9", "⅑"),
    ("1", "10", "⅒"),
];

/// Which script table to map through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Superscript,
    Subscript,
}

impl ScriptKind {
    fn table(self) -> &'static phf::Map<char, char> {
        match self {
            ScriptKind::Superscript => &SUPERSCRIPTS,
            ScriptKind::Subscript => &SUBSCRIPTS,
        }
    }
}

/// Map every character of `content` through the script table.
///
/// Characters without an entry are emitted unchanged.
pub fn to_script(content: &str, kind: ScriptKind) -> String {
    let table = kind.table();
    content
        .chars()
        .map(|c| table.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Precomposed glyph for `num/den`, compared verbatim
pub fn lookup_fraction(num: &str, den: &str) -> Option<&'static str> {
    FRACTIONS
        .iter()
        .find(|(n, d, _)| *n == num && *d == den)
        .map(|(_, _, glyph)| *glyph)
}
