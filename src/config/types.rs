//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::config::headers::{API_CHECKLIST, WEB_CHECKLIST};
use crate::error_handling::AuditError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
///
/// Independent of the log format: this selects how the audit report itself is
/// rendered on stdout.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sectioned report with colors (default)
    Plain,
    /// Machine-readable JSON report
    Json,
}

/// Which checklist the response is evaluated against.
///
/// Selection is an input parameter; the tool never tries to guess whether a
/// target is a web frontend or an API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Web frontend checklist (13 headers)
    Web,
    /// API endpoint checklist (6 headers)
    Api,
}

impl Mode {
    /// Returns the header checklist for this mode.
    pub fn checklist(&self) -> &'static [&'static str] {
        match self {
            Mode::Web => WEB_CHECKLIST,
            Mode::Api => API_CHECKLIST,
        }
    }

    /// Returns the OWASP reference URL for this mode.
    pub fn reference_url(&self) -> &'static str {
        match self {
            Mode::Web => "https://owasp.org/www-project-secure-headers/",
            Mode::Api => {
                "https://cheatsheetseries.owasp.org/cheatsheets/REST_Security_Cheat_Sheet.html"
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Web => write!(f, "web"),
            Mode::Api => write!(f, "api"),
        }
    }
}

impl FromStr for Mode {
    type Err = AuditError;

    /// Parses a mode selector.
    ///
    /// Accepts `web`/`api` (case-insensitive) and the menu digits `1`/`2`
    /// for callers ported from the interactive predecessor. Anything else is
    /// `AuditError::InvalidMode`, raised before any network call is made.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" | "1" => Ok(Mode::Web),
            "api" | "2" => Ok(Mode::Api),
            _ => Err(AuditError::InvalidMode(s.to_string())),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use header_audit::{Config, Mode};
///
/// let config = Config {
///     url: "example.com".to_string(),
///     mode: Mode::Web,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Target URL (https:// is assumed when the scheme is missing)
    pub url: String,

    /// Which checklist to evaluate the response against
    pub mode: Mode,

    /// Optional Authorization header value (e.g. "Bearer eyJ...")
    pub auth_token: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Disable TLS certificate verification (off by default; logs a warning when enabled)
    pub insecure: bool,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Report output format
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            mode: Mode::Web,
            auth_token: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
        }
    }
}
