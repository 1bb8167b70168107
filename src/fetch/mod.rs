//! HTTP fetching.
//!
//! Performs the single GET request and extracts the response metadata the
//! classifier needs: status line and a normalized header map.

use std::collections::HashMap;

use log::debug;

use crate::error_handling::AuditError;

/// Status line and headers of the final response (after redirects).
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// URL of the final response, after any redirects
    pub final_url: String,
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status code
    pub status_desc: String,
    /// Response headers with names lowercased at this boundary.
    /// All downstream comparison relies on this normalization.
    pub headers: HashMap<String, String>,
}

/// Performs exactly one HTTP GET against `url` and returns the final
/// response's status line and headers.
///
/// Redirect following is handled by the client (see
/// `initialization::init_client`); only the final response is inspected.
/// The response body is never read.
///
/// # Arguments
///
/// * `client` - The configured HTTP client
/// * `url` - Normalized absolute URL
/// * `auth_token` - Optional Authorization header value, sent verbatim
///
/// # Errors
///
/// Returns `AuditError::Network` on DNS, connect, TLS, or timeout failure.
/// The error is terminal; the request is not retried.
pub async fn fetch_headers(
    client: &reqwest::Client,
    url: &str,
    auth_token: Option<&str>,
) -> Result<FetchedResponse, AuditError> {
    let mut request = client.get(url);
    if let Some(token) = auth_token {
        debug!("Sending authenticated request");
        request = request.header(reqwest::header::AUTHORIZATION, token);
    }

    let response = request.send().await?;

    let final_url = response.url().to_string();
    debug!("Final url after redirects: {final_url}");

    let status = response.status();
    let status_desc = status
        .canonical_reason()
        .unwrap_or("Unknown Status Code")
        .to_string();

    let headers = normalize_headers(response.headers());

    Ok(FetchedResponse {
        final_url,
        status: status.as_u16(),
        status_desc,
        headers,
    })
}

/// Converts a `HeaderMap` into a plain map with lowercased names.
///
/// Header names are case-insensitive on the wire; normalizing once here means
/// the classifier can use plain map lookups. Values that are not valid UTF-8
/// are replaced with an empty string. Repeated headers keep the last value.
fn normalize_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_ascii_lowercase(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

    #[test]
    fn test_normalize_headers_lowercases_names() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("strict-transport-security"),
            HeaderValue::from_static("max-age=63072000"),
        );
        headers.insert(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        );

        let map = normalize_headers(&headers);
        assert_eq!(
            map.get("strict-transport-security").map(String::as_str),
            Some("max-age=63072000")
        );
        assert_eq!(map.get("x-frame-options").map(String::as_str), Some("DENY"));
        assert!(map.keys().all(|k| k.chars().all(|c| !c.is_uppercase())));
    }

    #[test]
    fn test_normalize_headers_preserves_values() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("content-security-policy"),
            HeaderValue::from_static("default-src 'self'; frame-ancestors 'none'"),
        );

        let map = normalize_headers(&headers);
        assert_eq!(
            map.get("content-security-policy").map(String::as_str),
            Some("default-src 'self'; frame-ancestors 'none'")
        );
    }

    #[test]
    fn test_normalize_headers_empty_map() {
        let map = normalize_headers(&HeaderMap::new());
        assert!(map.is_empty());
    }
}
