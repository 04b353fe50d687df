//! Presentation helpers for already rendered equations

const BOLD_CYAN: &str = "\x1b[1;36m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

fn styled(text: &str, style: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

/// Wrap a rendered equation in blank lines, with an optional bold title line
pub fn format_equation(rendered: &str, title: Option<&str>, use_color: bool) -> String {
    match title {
        Some(title) => format!(
            "\n{}\n{}\n",
            styled(&format!("{}:", title), BOLD_CYAN, use_color),
            rendered
        ),
        None => format!("\n{}\n", rendered),
    }
}

/// Numbered step headers interleaved with rendered equations
pub fn format_steps<D: AsRef<str>>(steps: &[(D, String)], use_color: bool) -> String {
    let mut result = format!(
        "\n{}\n",
        styled("Step-by-step solution:", BOLD_CYAN, use_color)
    );

    for (i, (description, rendered)) in steps.iter().enumerate() {
        let label = styled(&format!("Step {}:", i + 1), DIM, use_color);
        result.push_str(&format!("\n{} {}\n", label, description.as_ref()));
        result.push_str(rendered);
        result.push('\n');
    }

    result
}
