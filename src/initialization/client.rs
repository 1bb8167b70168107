//! HTTP client initialization.
//!
//! This module provides the function to build the HTTP client used for the
//! single audit request.

use std::time::Duration;

use log::warn;
use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client for the audit request.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Timeout from the config
/// - Redirect following enabled (up to 10 hops); only the final response's
///   headers are inspected
/// - Rustls TLS backend
///
/// TLS certificate verification is enabled unless `config.insecure` is set,
/// in which case a prominent warning is logged before the client is built.
///
/// # Arguments
///
/// * `config` - Audit configuration containing timeout, user-agent, and TLS settings
///
/// # Returns
///
/// A configured HTTP client ready for making the request.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS));

    if config.insecure {
        warn!(
            "TLS certificate verification is DISABLED (--insecure). \
             The response cannot be trusted to come from the stated origin."
        );
        builder = builder.danger_accept_invalid_certs(true);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let config = Config {
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_insecure_still_builds() {
        let config = Config {
            insecure: true,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_with_custom_timeout() {
        let config = Config {
            timeout_seconds: 1,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
