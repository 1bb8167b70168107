//! header_audit library: one-shot security-header auditing
//!
//! This library fetches a single URL and classifies the response's headers
//! against a fixed checklist of security headers (web or API flavor) plus a
//! list of deprecated headers. The result is a structured report; rendering
//! is left to the caller (the CLI binary renders plain text or JSON).
//!
//! # Example
//!
//! ```no_run
//! use header_audit::{run_audit, Config, Mode};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "example.com".to_string(),
//!     mode: Mode::Web,
//!     ..Default::default()
//! };
//!
//! let report = run_audit(&config).await?;
//! println!("{} of {} headers present", report.present_count, report.checklist.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod audit;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod report;

// Re-export public API
pub use app::validate_and_normalize_url;
pub use config::{Config, LogFormat, LogLevel, Mode, OutputFormat};
pub use error_handling::{AuditError, InitializationError};
pub use report::AuditReport;
pub use run::run_audit;

// Internal run module (contains the fetch -> classify -> report flow)
mod run {
    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::app::validate_and_normalize_url;
    use crate::audit::{classify_checklist, classify_deprecated};
    use crate::config::Config;
    use crate::error_handling::AuditError;
    use crate::fetch::fetch_headers;
    use crate::initialization::init_client;
    use crate::report::AuditReport;

    /// Runs a single header audit with the provided configuration.
    ///
    /// This is the main entry point for the library. The flow is strictly
    /// linear: validate the URL, perform one GET, classify the response
    /// headers, and build the report. There is no retry and no partial
    /// report on failure.
    ///
    /// A Ctrl-C while the request is in flight aborts it and surfaces
    /// `AuditError::Aborted`.
    ///
    /// # Arguments
    ///
    /// * `config` - Audit configuration (target URL, mode, token, timeout, TLS)
    ///
    /// # Returns
    ///
    /// Returns an `AuditReport`, or an error if the URL is invalid or the
    /// fetch failed. Missing headers are a finding inside the report, never
    /// an error.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The target URL fails validation (`AuditError::InvalidUrl`)
    /// - The HTTP client cannot be constructed
    /// - The fetch fails (`AuditError::Network`) or is interrupted
    ///   (`AuditError::Aborted`)
    pub async fn run_audit(config: &Config) -> Result<AuditReport> {
        let target = validate_and_normalize_url(&config.url)?;

        let client = init_client(config).context("Failed to initialize HTTP client")?;

        if config.auth_token.is_some() {
            info!("Using authenticated request");
        }
        info!("Sending request to {target}");

        let fetched = tokio::select! {
            result = fetch_headers(&client, &target, config.auth_token.as_deref()) => result?,
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted while waiting for {target}");
                return Err(AuditError::Aborted.into());
            }
        };

        info!("Response: {} {}", fetched.status, fetched.status_desc);

        let checklist = classify_checklist(&fetched.headers, config.mode.checklist());
        let deprecated = classify_deprecated(&fetched.headers);

        Ok(AuditReport::new(
            target,
            config.mode,
            &fetched,
            checklist,
            deprecated,
        ))
    }
}
