//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, etc.)
//! - The security-header checklists and deprecated-header list
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, Mode, OutputFormat};
