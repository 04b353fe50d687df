//! Utility modules
//!
//! This module contains the layers around the renderer:
//! - Error types and result types
//! - Configuration loading
//! - Step-by-step input parsing
//! - Logging setup (CLI only)

pub mod config;
pub mod error;
#[cfg(feature = "cli")]
pub mod logger;
pub mod steps;

// Re-export commonly used items
pub use config::{Config, LogConfig, CONFIG_ENV};
pub use error::{FaustError, FaustResult};
pub use steps::parse_steps;
