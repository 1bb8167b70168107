//! Configuration constants.

/// Default per-request timeout in seconds.
///
/// The fetch fails with a network error once this expires; the request is not
/// retried. Users can override this via the `--timeout-seconds` CLI flag.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum number of redirect hops to follow.
/// Prevents infinite redirect loops; only the final response's headers are inspected.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum URL length (2048 characters).
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// Identifies the tool honestly; this is an audit client, not a crawler trying
/// to pass for a browser. Users can override it via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("header_audit/", env!("CARGO_PKG_VERSION"));
