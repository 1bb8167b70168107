//! HTTP header name constants.
//!
//! This module defines the security-header checklists and the deprecated-header
//! list that the auditor evaluates a response against.

// Security header names
// Each checklist entry is also exposed as a named constant so other code can
// refer to individual headers without string literals.
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// X-Permitted-Cross-Domain-Policies header
pub const HEADER_X_PERMITTED_CROSS_DOMAIN_POLICIES: &str = "X-Permitted-Cross-Domain-Policies";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";
/// Clear-Site-Data header
pub const HEADER_CLEAR_SITE_DATA: &str = "Clear-Site-Data";
/// Cross-Origin-Embedder-Policy header
pub const HEADER_CROSS_ORIGIN_EMBEDDER_POLICY: &str = "Cross-Origin-Embedder-Policy";
/// Cross-Origin-Opener-Policy header
pub const HEADER_CROSS_ORIGIN_OPENER_POLICY: &str = "Cross-Origin-Opener-Policy";
/// Cross-Origin-Resource-Policy header
pub const HEADER_CROSS_ORIGIN_RESOURCE_POLICY: &str = "Cross-Origin-Resource-Policy";
/// Cache-Control header
pub const HEADER_CACHE_CONTROL: &str = "Cache-Control";
/// X-DNS-Prefetch-Control header
pub const HEADER_X_DNS_PREFETCH_CONTROL: &str = "X-DNS-Prefetch-Control";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "Permissions-Policy";
/// Content-Type header
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// Checklist for web frontends.
///
/// Order matters: the report lists headers in exactly this order.
/// To add/remove headers, modify this array.
pub const WEB_CHECKLIST: &[&str] = &[
    HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_FRAME_OPTIONS,
    HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_CONTENT_SECURITY_POLICY,
    HEADER_X_PERMITTED_CROSS_DOMAIN_POLICIES,
    HEADER_REFERRER_POLICY,
    HEADER_CLEAR_SITE_DATA,
    HEADER_CROSS_ORIGIN_EMBEDDER_POLICY,
    HEADER_CROSS_ORIGIN_OPENER_POLICY,
    HEADER_CROSS_ORIGIN_RESOURCE_POLICY,
    HEADER_CACHE_CONTROL,
    HEADER_X_DNS_PREFETCH_CONTROL,
    HEADER_PERMISSIONS_POLICY,
];

/// Checklist for API endpoints.
///
/// Smaller than the web checklist: browser-only policies (framing, cross-origin
/// isolation) matter less for machine-to-machine responses.
pub const API_CHECKLIST: &[&str] = &[
    HEADER_CACHE_CONTROL,
    HEADER_CONTENT_SECURITY_POLICY,
    HEADER_CONTENT_TYPE,
    HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_X_FRAME_OPTIONS,
];

// Deprecated header names
/// Feature-Policy header (superseded by Permissions-Policy)
pub const HEADER_FEATURE_POLICY: &str = "Feature-Policy";
/// Expect-CT header (obsolete since Certificate Transparency became mandatory)
pub const HEADER_EXPECT_CT: &str = "Expect-CT";
/// Public-Key-Pins header (HPKP, withdrawn)
pub const HEADER_PUBLIC_KEY_PINS: &str = "Public-Key-Pins";
/// X-XSS-Protection header (superseded by Content-Security-Policy)
pub const HEADER_X_XSS_PROTECTION: &str = "X-XSS-Protection";
/// Pragma header (HTTP/1.0 caching, superseded by Cache-Control)
pub const HEADER_PRAGMA: &str = "Pragma";

/// Headers that are obsolete and signal an outdated configuration if present.
///
/// Checked in both modes. Presence is a finding, not an error.
pub const DEPRECATED_HEADERS: &[&str] = &[
    HEADER_FEATURE_POLICY,
    HEADER_EXPECT_CT,
    HEADER_PUBLIC_KEY_PINS,
    HEADER_X_XSS_PROTECTION,
    HEADER_PRAGMA,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_checklist_has_thirteen_entries() {
        assert_eq!(WEB_CHECKLIST.len(), 13);
    }

    #[test]
    fn test_api_checklist_has_six_entries() {
        assert_eq!(API_CHECKLIST.len(), 6);
    }

    #[test]
    fn test_checklists_and_deprecated_list_are_disjoint() {
        for deprecated in DEPRECATED_HEADERS {
            assert!(
                !WEB_CHECKLIST.contains(deprecated),
                "{} is both required and deprecated",
                deprecated
            );
            assert!(
                !API_CHECKLIST.contains(deprecated),
                "{} is both required and deprecated",
                deprecated
            );
        }
    }

    #[test]
    fn test_no_duplicate_entries() {
        for list in [WEB_CHECKLIST, API_CHECKLIST, DEPRECATED_HEADERS] {
            let mut seen = std::collections::HashSet::new();
            for name in list {
                assert!(
                    seen.insert(name.to_ascii_lowercase()),
                    "duplicate entry: {}",
                    name
                );
            }
        }
    }
}
