//! Logging setup for the CLI
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job.
//!
//! Level resolution, first match wins:
//! 1. `--verbose`: debug for faust
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. the configured level (`[log] level`, default info)

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter for the given flags and configured level
pub fn build_filter(verbose: bool, quiet: bool, level: Level) -> EnvFilter {
    if verbose {
        EnvFilter::new("faust=debug")
    } else if quiet {
        EnvFilter::new("faust=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("faust={}", level.as_str().to_ascii_lowercase()))
        })
    }
}

/// Install the global subscriber. Logs go to stderr so rendered output on
/// stdout stays clean.
pub fn init_logger(verbose: bool, quiet: bool, level: Level, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet, level))
        .with(fmt_layer)
        .try_init();
}

/// Colors are off when `NO_COLOR` is set
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
