//! Header classification.
//!
//! Pure functions that evaluate a response's header map against the static
//! checklists. No I/O, no side effects; the header map is never mutated.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::DEPRECATED_HEADERS;

/// Status of a checklist header in the audited response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum HeaderStatus {
    /// The header is present, with its value
    Present(String),
    /// The header is absent
    Missing,
}

/// Status of a deprecated header in the audited response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum DeprecatedStatus {
    /// The obsolete header is present, with its value
    Found(String),
    /// The obsolete header is absent (the good outcome)
    Absent,
}

/// A checklist entry paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderFinding {
    /// Canonical header name from the checklist
    pub name: &'static str,
    /// Whether the response carried it
    #[serde(flatten)]
    pub status: HeaderStatus,
}

/// A deprecated-list entry paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeprecatedFinding {
    /// Canonical header name from the deprecated list
    pub name: &'static str,
    /// Whether the response carried it
    #[serde(flatten)]
    pub status: DeprecatedStatus,
}

/// Classifies each checklist entry as present or missing.
///
/// Matching is case-insensitive: the checklist name is lowercased for the
/// lookup, and `headers` keys are lowercased at the fetch boundary.
/// The returned vector preserves checklist order.
pub fn classify_checklist(
    headers: &HashMap<String, String>,
    checklist: &'static [&'static str],
) -> Vec<HeaderFinding> {
    checklist
        .iter()
        .map(|&name| {
            let status = match headers.get(&name.to_ascii_lowercase()) {
                Some(value) => HeaderStatus::Present(value.clone()),
                None => HeaderStatus::Missing,
            };
            HeaderFinding { name, status }
        })
        .collect()
}

/// Classifies each deprecated header as found or absent.
///
/// Independent of the checklist classification; both read the same header map
/// without affecting each other. The returned vector preserves list order.
pub fn classify_deprecated(headers: &HashMap<String, String>) -> Vec<DeprecatedFinding> {
    DEPRECATED_HEADERS
        .iter()
        .map(|&name| {
            let status = match headers.get(&name.to_ascii_lowercase()) {
                Some(value) => DeprecatedStatus::Found(value.clone()),
                None => DeprecatedStatus::Absent,
            };
            DeprecatedFinding { name, status }
        })
        .collect()
}
