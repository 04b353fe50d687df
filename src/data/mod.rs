//! Data layer - static lookup tables
//!
//! - Greek letters, operators, number sets and roots (`symbols`)
//! - Superscript, subscript and vulgar fraction maps (`scripts`)

pub mod scripts;
pub mod symbols;

// Re-export commonly used items
pub use scripts::{lookup_fraction, to_script, ScriptKind, FRACTIONS, SUBSCRIPTS, SUPERSCRIPTS};
pub use symbols::{
    lookup_greek, lookup_number_set, lookup_operator, root_symbol, GREEK_LETTERS, NUMBER_SETS,
    OPERATORS, ROOT_SYMBOLS,
};
