//! Integration tests for Faust math rendering

use faust::{
    format_equation, format_step_by_step, render, render_guarded, CommandMatching, MathDisplay,
    MathRenderer, RenderOptions, StreamRenderer,
};

fn tokenized() -> MathRenderer {
    MathRenderer::new(RenderOptions {
        command_matching: CommandMatching::Tokenized,
        ..RenderOptions::default()
    })
}

// ============================================================================
// Span Detection
// ============================================================================

mod spans {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_without_math_is_identity() {
        let samples = [
            "Just a sentence.",
            "Braces {x} and carets ^ and underscores _ stay.",
            r"A backslash \alpha outside math stays too",
            "Multi\nline\ttext",
            "unicode: α β ∑",
        ];
        for text in samples {
            assert_eq!(render(text), text);
        }
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(render(""), "");
        assert_eq!(render("   "), "   ");
        assert_eq!(render("\n\t\n"), "\n\t\n");
    }

    #[test]
    fn test_unterminated_inline() {
        assert_eq!(render("$unterminated"), "$unterminated");
        assert_eq!(render(r"costs $\alpha"), r"costs $\alpha");
    }

    #[test]
    fn test_inline_in_sentence() {
        assert_eq!(
            render(r"Since $a \neq 0$, divide by $a$."),
            "Since a ≠ 0, divide by a."
        );
    }

    #[test]
    fn test_display_math_on_own_line() {
        let result = render("$$E = mc^2$$");
        assert!(result.starts_with('\n'));
        assert!(result.ends_with('\n'));
        assert!(result.contains("mc²"));
        assert_eq!(result, "\nE = mc²\n");
    }

    #[test]
    fn test_display_and_inline_together() {
        assert_eq!(
            render("Let $x = 2$. Then $$x^2 = 4$$ holds."),
            "Let x = 2. Then \nx² = 4\n holds."
        );
    }

    #[test]
    fn test_equation_environment() {
        let input = "Consider\n\\begin{equation}\n  \\int_0^1 x\\,dx = \\frac{1}{2}\n\\end{equation}\ndone";
        assert_eq!(render(input), "Consider\n\n∫₀¹ x dx = ½\n\ndone");
    }

    #[test]
    fn test_whitespace_only_span() {
        assert_eq!(render("a $  $ b"), "a    b");
    }
}

// ============================================================================
// Transformation Pipeline
// ============================================================================

mod pipeline {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_superscript() {
        assert_eq!(render("$x^2$"), "x²");
        assert_eq!(render("$x^{10}$"), "x¹⁰");
        assert_eq!(render("$e^{-x}$"), "e⁻ˣ");
    }

    #[test]
    fn test_subscript() {
        assert_eq!(render("$a_{n+1} = a_n + 1$"), "aₙ₊₁ = aₙ + 1");
        assert_eq!(render("$x_{ij}$"), "xᵢⱼ");
    }

    #[test]
    fn test_unmapped_script_characters_pass_through() {
        assert_eq!(render("$x^{y}$"), "xy");
        assert_eq!(render("$x_{b}$"), "xb");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(render(r"$\frac{1}{2}$"), "½");
        assert_eq!(render(r"$\frac{2}{7}$"), "(2)/(7)");
        assert_eq!(render(r"$\frac{x+1}{x-1}$"), "(x+1)/(x-1)");
        assert_eq!(render(r"$\frac{1}{10}$"), "⅒");
    }

    #[test]
    fn test_greek_letters() {
        assert_eq!(render(r"$\alpha + \beta$"), "α + β");
        assert_eq!(render(r"$\theta = \pi/4$"), "θ = π/4");
        assert_eq!(render(r"$\Delta x$"), "\u{394} x");
    }

    #[test]
    fn test_operators() {
        assert_eq!(render(r"$a \leq b \geq c$"), "a ≤ b ≥ c");
        assert_eq!(render(r"$\forall x \in A$"), "∀ x ∈ A");
        assert_eq!(render(r"$f: A \to B$"), "f: A → B");
        assert_eq!(render(r"$3 \times 4 \div 2$"), "3 × 4 ÷ 2");
    }

    #[test]
    fn test_big_operators_with_bounds() {
        assert_eq!(render(r"$\sum_{i=1}^{n} i$"), "∑ᵢ₌₁ⁿ i");
        assert_eq!(render(r"$\int_0^\infty e^{-x} dx$"), "∫₀∞ e⁻ˣ dx");
    }

    #[test]
    fn test_roots() {
        assert_eq!(render(r"$\sqrt{16}$"), "√(16)");
        assert_eq!(render(r"$\sqrt[3]{8}$"), "∛(8)");
        assert_eq!(render(r"$\sqrt[4]{81}$"), "∜(81)");
        assert_eq!(render(r"$\sqrt[5]{32}$"), "ⁿ√(32)");
    }

    #[test]
    fn test_limits() {
        assert!(render(r"$\lim_{x \to 0} f(x)$").contains("lim[x→0]"));
        assert_eq!(render(r"$\lim_{x \to 0} f(x)$"), "lim[x→0] f(x)");
        assert_eq!(render(r"$\max_{i} a_i$"), "max[i] aᵢ");
        assert_eq!(render(r"$\min_{x} g(x)$"), "min[x] g(x)");
        assert_eq!(render(r"$\sup_{n} s_n$"), "sup[n] sₙ");
    }

    #[test]
    fn test_infimum_with_literal_matching() {
        assert_eq!(render(r"$\inf_{x} f$"), "inf[x] f");
        assert_eq!(render(r"$\inf_{E}$"), "inf[E]");
        assert_eq!(render(r"$\inf_{x \in S} f(x)$"), "inf[x ∈ S] f(x)");
        assert_eq!(render(r"$\inf_{x} f + \int g$"), "inf[x] f + ∫ g");
        assert_eq!(render(r"$\lim_{n \to \infty} a_n$"), "lim[n→∞] aₙ");
    }

    #[test]
    fn test_number_sets() {
        assert_eq!(render(r"$\mathbb{N} \subset \mathbb{Z} \subset \mathbb{Q}$"), "ℕ ⊂ ℤ ⊂ ℚ");
        assert_eq!(render(r"$z \in \mathbb{C}$"), "z ∈ ℂ");
    }

    #[test]
    fn test_number_set_collision_is_preserved() {
        // \mathbb{E} shares ℝ with \mathbb{R}; fixing the table must update this test
        assert_eq!(render(r"$\mathbb{E}$"), "ℝ");
        assert_eq!(render(r"$\mathbb{R}$"), "ℝ");
        assert_eq!(render(r"$\mathbb{E}$"), render(r"$\mathbb{R}$"));
    }

    #[test]
    fn test_cleanup() {
        assert_eq!(render(r"$\left( \frac{a}{b} \right)$"), "( (a)/(b) )");
        assert_eq!(render(r"$x = 1 \text{ if } y$"), "x = 1  if  y");
        assert_eq!(render(r"$\mathbf{v} \cdot \mathbf{w}$"), "v · w");
        assert_eq!(render(r"$a \quad b$"), "a      b");
        assert_eq!(render(r"$\sin x + \cos y$"), "sin x + cos y");
    }

    #[test]
    fn test_unknown_commands_degrade_to_text() {
        assert_eq!(render(r"$\hbar \omega$"), "hbar ω");
        assert_eq!(render(r"$\frac{x^{2}}{y}$"), "frac{x²}{y}");
    }
}

// ============================================================================
// Command Matching Modes
// ============================================================================

mod matching {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_literal_is_default() {
        assert_eq!(
            RenderOptions::default().command_matching,
            CommandMatching::Literal
        );
    }

    #[test]
    fn test_literal_partial_matches() {
        assert_eq!(render(r"$a \simeq b$"), "a ∼eq b");
        assert_eq!(render(r"$A \subseteq B$"), "A ⊂eq B");
    }

    #[test]
    fn test_tokenized_full_names() {
        let r = tokenized();
        assert_eq!(r.render(r"$a \simeq b$"), "a ≃ b");
        assert_eq!(r.render(r"$A \subseteq B$"), "A ⊆ B");
        assert_eq!(r.render(r"$x \notin S$"), "x ∉ S");
        assert_eq!(r.render(r"$\inf_{x \in S} f(x)$"), "inf[x ∈ S] f(x)");
    }

    #[test]
    fn test_modes_agree_on_simple_input() {
        let r = tokenized();
        for text in [r"$\alpha + \beta$", r"$\sqrt{2}$", r"$x \to \infty$"] {
            assert_eq!(r.render(text), render(text));
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const SAMPLES: &[&str] = &[
        "",
        "plain",
        "$x^2$",
        r"$\frac{1}{2} + \frac{2}{7}$",
        r"$\alpha + \beta$",
        r"$$\sum_{i=1}^{n} i = \frac{n(n+1)}{2}$$",
        r"$\lim_{x \to 0} \frac{\sin x}{x} = 1$",
        r"\begin{equation}\sqrt[3]{27} = 3\end{equation}",
        "$unterminated",
        r"Mix $a$ and $$b^2$$ and $\mathbb{R}$",
        r"$\left[ 0, 1 \right] \subset \mathbb{R}$",
        "a $ $ b",
    ];

    /// Fragments that exercise delimiters, scripts and command tables
    const FRAGMENTS: &[&str] = &[
        "$", "$$", " ", "\n", "x", "n", "2", "+", "^", "_", "{", "}", "^2", "_{n}",
        r"\alpha", r"\in", r"\infty", r"\inf_{x}", r"\lim_{x \to 0}", r"\frac{1}{2}",
        r"\sqrt{2}", r"\mathbb{R}", r"\left(", r"\right)", r"\text{ if }", r"\quad",
        r"\begin{equation}", r"\end{equation}",
    ];

    fn math_text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(FRAGMENTS), 0..32)
            .prop_map(|parts| parts.concat())
    }

    #[test]
    fn test_stray_display_delimiter_is_idempotent() {
        let once = render("$$a$b$");
        assert_eq!(once, "ab");
        assert_eq!(render(&once), once);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(512))]

        /// Text without math delimiters comes back unchanged
        #[test]
        fn prop_text_without_math_is_identity(text in "[^$]*") {
            prop_assume!(!text.contains("\\begin{equation}"));
            prop_assert_eq!(render(&text), text);
        }

        /// Rendering twice gives the same result as rendering once
        #[test]
        fn prop_render_is_idempotent(text in math_text()) {
            let once = render(&text);
            prop_assert_eq!(render(&once), once);
        }

        #[test]
        fn prop_tokenized_render_is_idempotent(text in math_text()) {
            let r = tokenized();
            let once = r.render(&text);
            prop_assert_eq!(r.render(&once), once);
        }

        /// The renderer is total over arbitrary input
        #[test]
        fn prop_guarded_matches_plain(text in ".*") {
            prop_assert_eq!(render_guarded(&text), render(&text));
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        for text in SAMPLES {
            let once = render(text);
            assert_eq!(render(&once), once, "input: {:?}", text);
        }
    }

    #[test]
    fn test_guarded_matches_plain() {
        for text in SAMPLES {
            assert_eq!(render_guarded(text), render(text));
        }
    }

    #[test]
    fn test_concurrent_rendering() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| SAMPLES.iter().map(|t| render(t)).collect::<Vec<_>>()))
            .collect();
        let expected: Vec<_> = SAMPLES.iter().map(|t| render(t)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}

// ============================================================================
// Presentation Helpers
// ============================================================================

mod presentation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_equation() {
        assert_eq!(format_equation("$x^2$", None), "\nx²\n");
        assert_eq!(
            format_equation(r"$\frac{1}{2}$", Some("Half")),
            "\nHalf:\n½\n"
        );
    }

    #[test]
    fn test_format_step_by_step() {
        let steps = [
            ("Start", "$2x + 3 = 7$"),
            ("Subtract 3", "$2x = 4$"),
            ("Divide by 2", "$x = 2$"),
        ];
        assert_eq!(
            format_step_by_step(&steps),
            "\nStep-by-step solution:\n\
             \nStep 1: Start\n2x + 3 = 7\n\
             \nStep 2: Subtract 3\n2x = 4\n\
             \nStep 3: Divide by 2\nx = 2\n"
        );
    }

    #[test]
    fn test_colored_title() {
        let r = MathRenderer::new(RenderOptions {
            color: true,
            ..RenderOptions::default()
        });
        let out = r.format_equation("$x$", Some("Result"));
        assert!(out.contains("\x1b[1;36mResult:\x1b[0m"));
        assert!(out.ends_with("x\n"));
    }

    #[test]
    fn test_both_display_keeps_source() {
        let r = MathRenderer::new(RenderOptions {
            math_display: MathDisplay::Both,
            ..RenderOptions::default()
        });
        assert_eq!(r.render(r"$\alpha$"), "α\n\n$\\alpha$");
    }
}

// ============================================================================
// Streaming
// ============================================================================

mod streaming {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stream_matches_full_render() {
        let response = r"The limit is $\lim_{x \to 0} \frac{1}{2}$, as $$\alpha^2$$ shows.";
        let renderer = MathRenderer::default();
        let mut stream = StreamRenderer::new(&renderer);

        let mut last = String::new();
        for chunk in response.as_bytes().chunks(7) {
            last = stream.push(std::str::from_utf8(chunk).unwrap());
        }
        assert_eq!(last, render(response));
        assert_eq!(stream.raw(), response);
    }
}
