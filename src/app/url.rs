//! URL validation and normalization utilities.

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AuditError;

/// Validates and normalizes a target URL.
///
/// Adds an https:// prefix if the scheme is missing, then validates that the
/// URL is syntactically valid and uses the http or https scheme. Rejects URLs
/// longer than `MAX_URL_LENGTH`.
///
/// # Arguments
///
/// * `url` - The URL string to validate and normalize
///
/// # Returns
///
/// The normalized URL string.
///
/// # Errors
///
/// Returns `AuditError::InvalidUrl` if the URL is empty, too long,
/// syntactically invalid, or uses an unsupported scheme. No network call has
/// been made at this point.
pub fn validate_and_normalize_url(url: &str) -> Result<String, AuditError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(AuditError::InvalidUrl("empty URL".to_string()));
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(AuditError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {})",
            trimmed.len(),
            MAX_URL_LENGTH
        )));
    }

    // Normalize: add https:// prefix when no scheme is given, and reject
    // explicit non-http schemes instead of mangling them into https://ftp://...
    let normalized = match explicit_scheme(trimmed) {
        Some(scheme)
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
        {
            trimmed.to_string()
        }
        Some(scheme) => {
            return Err(AuditError::InvalidUrl(format!(
                "unsupported scheme '{scheme}' in {trimmed}"
            )))
        }
        None => format!("https://{trimmed}"),
    };

    // Validate: check syntax
    match url::Url::parse(&normalized) {
        Ok(_) => Ok(normalized),
        Err(e) => Err(AuditError::InvalidUrl(format!("{trimmed}: {e}"))),
    }
}

/// Returns the explicit `<scheme>://` prefix of `url`, if it has one.
///
/// Only a valid scheme token (RFC 3986: ALPHA followed by ALPHA / DIGIT /
/// "+" / "-" / ".") counts; a `://` buried in a path or query, as in
/// `example.com/redirect?next=https://other`, does not.
fn explicit_scheme(url: &str) -> Option<&str> {
    let (scheme, _) = url.split_once("://")?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        Some(scheme)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_https_prefix_when_scheme_missing() {
        assert_eq!(
            validate_and_normalize_url("example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_keeps_existing_scheme() {
        assert_eq!(
            validate_and_normalize_url("http://example.com").unwrap(),
            "http://example.com"
        );
        assert_eq!(
            validate_and_normalize_url("https://example.com/path?q=1").unwrap(),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(
            validate_and_normalize_url("  example.com  ").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_rejects_empty_url() {
        assert!(matches!(
            validate_and_normalize_url("   "),
            Err(AuditError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        for bad in ["ftp://example.com", "file:///etc/passwd", "ws://example.com"] {
            assert!(
                matches!(
                    validate_and_normalize_url(bad),
                    Err(AuditError::InvalidUrl(_))
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_http_scheme_error_names_the_scheme() {
        match validate_and_normalize_url("ftp://example.com") {
            Err(AuditError::InvalidUrl(msg)) => {
                assert!(msg.contains("ftp"), "message should name the scheme: {msg}")
            }
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_uppercase_http_scheme() {
        // Schemes are case-insensitive on the wire
        assert_eq!(
            validate_and_normalize_url("HTTP://example.com").unwrap(),
            "HTTP://example.com"
        );
    }

    #[test]
    fn test_scheme_separator_in_query_is_not_a_scheme() {
        // The :// belongs to the query value, not an explicit scheme
        assert_eq!(
            validate_and_normalize_url("example.com/redirect?next=https://other").unwrap(),
            "https://example.com/redirect?next=https://other"
        );
    }

    #[test]
    fn test_rejects_overlong_url() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            validate_and_normalize_url(&long),
            Err(AuditError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_unparseable_url() {
        assert!(matches!(
            validate_and_normalize_url("https://"),
            Err(AuditError::InvalidUrl(_))
        ));
    }
}
