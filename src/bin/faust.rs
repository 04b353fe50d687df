//! Faust CLI - render LaTeX math to Unicode for the terminal

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use faust::{
    contains_math,
    data::{FRACTIONS, GREEK_LETTERS, NUMBER_SETS, OPERATORS, ROOT_SYMBOLS, SUBSCRIPTS, SUPERSCRIPTS},
    parse_steps,
    utils::logger::{init_logger, should_use_colors},
    CommandMatching, Config, FaustResult, MathDisplay, MathRenderer,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::process::ExitCode;
#[cfg(feature = "cli")]
use tracing::{debug, info};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "faust")]
#[command(version)]
#[command(about = "Faust - render LaTeX math to Unicode for terminal display", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to $FAUST_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// How math is presented
    #[arg(long, value_enum, global = true)]
    display: Option<DisplayMode>,

    /// Only replace commands whose full name is known
    #[arg(long, global = true)]
    tokenized: bool,

    /// Style equation titles and step labels
    #[arg(long, global = true)]
    color: bool,

    /// Disable colored log and header output
    #[arg(long, global = true)]
    no_color: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Render math spans in a file or stdin (default action)
    Render {
        /// Input file path
        input: Option<PathBuf>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a single equation for display
    Equation {
        /// Equation text, with or without math delimiters (e.g. 'x^2')
        latex: String,

        /// Title printed above the equation
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Render a step-by-step solution, one `description | equation` per line
    Steps {
        /// Steps file (reads from stdin if not provided)
        input: Option<PathBuf>,
    },

    /// List the symbol tables
    Symbols {
        /// Table to list (all tables if omitted)
        #[arg(short, long, value_enum)]
        table: Option<Table>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum DisplayMode {
    /// Replace LaTeX with Unicode
    Unicode,
    /// Leave LaTeX untouched
    Latex,
    /// Rendered text followed by the source
    Both,
}

#[cfg(feature = "cli")]
impl From<DisplayMode> for MathDisplay {
    fn from(display: DisplayMode) -> Self {
        match display {
            DisplayMode::Unicode => MathDisplay::Unicode,
            DisplayMode::Latex => MathDisplay::Latex,
            DisplayMode::Both => MathDisplay::Both,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Table {
    Greek,
    Operators,
    Sets,
    Roots,
    Fractions,
    Superscripts,
    Subscripts,
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let use_color = !cli.no_color && should_use_colors();
    let level = config.log.level().unwrap_or(tracing::Level::INFO);
    init_logger(cli.verbose, cli.quiet, level, !use_color);

    match run(cli, config, use_color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli, config: Config, use_color: bool) -> FaustResult<()> {
    // Flags override the config file
    let mut options = config.render;
    if let Some(display) = cli.display {
        options.math_display = display.into();
    }
    if cli.tokenized {
        options.command_matching = CommandMatching::Tokenized;
    }
    options.color = (options.color || cli.color) && use_color;
    debug!(?options, "render options");

    let renderer = MathRenderer::new(options);

    match cli.command {
        Some(Commands::Render { input, output }) => render_file(&renderer, input, output),
        Some(Commands::Equation { latex, title }) => {
            // A bare expression is treated as inline math
            let equation = if contains_math(&latex) {
                latex
            } else {
                format!("${}$", latex)
            };
            print!("{}", renderer.format_equation(&equation, title.as_deref()));
            Ok(())
        }
        Some(Commands::Steps { input }) => {
            let content = read_input(input.as_ref())?;
            let steps = parse_steps(&content)?;
            info!(count = steps.len(), "rendering steps");
            print!("{}", renderer.format_step_by_step(&steps));
            Ok(())
        }
        Some(Commands::Symbols { table }) => {
            print_symbols(table);
            Ok(())
        }
        Some(Commands::Info) => {
            print_info();
            Ok(())
        }
        None => render_file(&renderer, cli.input_file, cli.output),
    }
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&PathBuf>) -> FaustResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn render_file(
    renderer: &MathRenderer,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> FaustResult<()> {
    let content = read_input(input.as_ref())?;
    let result = renderer.render_guarded(&content);

    match output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            write!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path.display());
        }
        None => {
            print!("{}", result);
            io::stdout().flush()?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_symbols(table: Option<Table>) {
    let show = |t: Table| table.map_or(true, |selected| selected == t);

    if show(Table::Greek) {
        println!("Greek letters:");
        for (name, glyph) in GREEK_LETTERS.entries() {
            println!("  \\{:<16} {}", name, glyph);
        }
    }
    if show(Table::Operators) {
        println!("Operators:");
        for (name, glyph) in OPERATORS.entries() {
            println!("  \\{:<16} {}", name, glyph);
        }
    }
    if show(Table::Sets) {
        println!("Number sets:");
        for (name, glyph) in NUMBER_SETS.entries() {
            println!("  \\{:<16} {}", name, glyph);
        }
    }
    if show(Table::Roots) {
        println!("Roots:");
        let mut roots: Vec<_> = ROOT_SYMBOLS.entries().collect();
        roots.sort();
        for (index, glyph) in roots {
            println!("  \\sqrt[{}]{{..}}     {}", index, glyph);
        }
    }
    if show(Table::Fractions) {
        println!("Fractions:");
        for (num, den, glyph) in FRACTIONS {
            println!("  \\frac{{{}}}{{{}}}  {}", num, den, glyph);
        }
    }
    if show(Table::Superscripts) {
        println!("Superscripts:");
        let mut chars: Vec<_> = SUPERSCRIPTS.entries().collect();
        chars.sort();
        for (from, to) in chars {
            println!("  ^{}  {}", from, to);
        }
    }
    if show(Table::Subscripts) {
        println!("Subscripts:");
        let mut chars: Vec<_> = SUBSCRIPTS.entries().collect();
        chars.sort();
        for (from, to) in chars {
            println!("  _{}  {}", from, to);
        }
    }
}

#[cfg(feature = "cli")]
fn print_info() {
    println!("Faust - LaTeX math to Unicode renderer");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Math spans:");
    println!("  $...$                                inline");
    println!("  $$...$$                              display (own line)");
    println!("  \\begin{{equation}}...\\end{{equation}}  display (own line)");
    println!();
    println!("Conversions:");
    println!("  ✓ Fractions, super/subscripts, roots, limits");
    println!("  ✓ Greek letters ({})", GREEK_LETTERS.len());
    println!("  ✓ Operators and arrows ({})", OPERATORS.len());
    println!("  ✓ Number sets ({})", NUMBER_SETS.len());
    println!();
    println!("Configuration: --config <FILE> or $FAUST_CONFIG");
    println!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install faust --features cli");
    eprintln!("  faust [OPTIONS] [INPUT_FILE]");
}
