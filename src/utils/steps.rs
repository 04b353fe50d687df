//! Step-by-step input parsing
//!
//! One step per line, `description | equation`. Blank lines and lines
//! starting with `#` are skipped. Only the first `|` separates, so the
//! equation may contain `|` itself (absolute values, conditional bars).

use super::error::{FaustError, FaustResult};

/// Parse step lines into `(description, equation)` pairs
pub fn parse_steps(input: &str) -> FaustResult<Vec<(String, String)>> {
    let mut steps = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (description, equation) = trimmed
            .split_once('|')
            .ok_or_else(|| FaustError::invalid_step(idx + 1, "missing '|' separator"))?;

        let description = description.trim();
        let equation = equation.trim();
        if equation.is_empty() {
            return Err(FaustError::invalid_step(idx + 1, "empty equation"));
        }

        steps.push((description.to_string(), equation.to_string()));
    }

    Ok(steps)
}
