//! Audit report construction and rendering.
//!
//! The report is built as structured data first; rendering to plain text or
//! JSON is a separate, presentation-only step selected by `--output`.

use std::fmt::Write as _;

use colored::*;
use serde::Serialize;

use crate::audit::{DeprecatedFinding, DeprecatedStatus, HeaderFinding, HeaderStatus};
use crate::config::Mode;
use crate::fetch::FetchedResponse;

/// Structured result of one audit run.
///
/// Constructed once per run and consumed immediately by a renderer; nothing
/// is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Target URL as given (after scheme normalization)
    pub target: String,
    /// URL of the final response, after any redirects
    pub final_url: String,
    /// Checklist mode the audit ran in
    pub mode: Mode,
    /// HTTP status code of the final response
    pub status: u16,
    /// Reason phrase for the status code
    pub status_desc: String,
    /// Per-header checklist findings, in checklist order
    pub checklist: Vec<HeaderFinding>,
    /// Per-header deprecated findings, in list order
    pub deprecated: Vec<DeprecatedFinding>,
    /// Number of checklist headers present
    pub present_count: usize,
    /// Number of checklist headers missing
    pub missing_count: usize,
    /// Names of the missing checklist headers, in checklist order
    pub missing: Vec<String>,
    /// Names of the deprecated headers found, in list order
    pub deprecated_found: Vec<String>,
}

impl AuditReport {
    /// Builds a report from the fetch result and the two classifications.
    ///
    /// Derives the summary fields (counts, missing list, deprecated-found
    /// list) from the findings, so `present_count + missing_count` always
    /// equals the checklist length.
    pub fn new(
        target: String,
        mode: Mode,
        fetched: &FetchedResponse,
        checklist: Vec<HeaderFinding>,
        deprecated: Vec<DeprecatedFinding>,
    ) -> Self {
        let missing: Vec<String> = checklist
            .iter()
            .filter(|f| f.status == HeaderStatus::Missing)
            .map(|f| f.name.to_string())
            .collect();
        let present_count = checklist.len() - missing.len();
        let missing_count = missing.len();

        let deprecated_found: Vec<String> = deprecated
            .iter()
            .filter(|f| matches!(f.status, DeprecatedStatus::Found(_)))
            .map(|f| f.name.to_string())
            .collect();

        Self {
            target,
            final_url: fetched.final_url.clone(),
            mode,
            status: fetched.status,
            status_desc: fetched.status_desc.clone(),
            checklist,
            deprecated,
            present_count,
            missing_count,
            missing,
            deprecated_found,
        }
    }

    /// Renders the report as a human-readable sectioned text block.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();

        // Infallible: writing to a String cannot fail
        let _ = writeln!(
            out,
            "{} {} {}",
            "Response:".bold(),
            self.status,
            self.status_desc
        );

        let _ = writeln!(
            out,
            "\n{}",
            format!(
                "=== SECURITY HEADERS CHECK ({}) ===",
                self.mode.to_string().to_uppercase()
            )
            .magenta()
            .bold()
        );
        for finding in &self.checklist {
            match &finding.status {
                HeaderStatus::Present(value) => {
                    let _ = writeln!(
                        out,
                        "{} {:35} -> {}",
                        "[+]".green(),
                        finding.name,
                        value
                    );
                }
                HeaderStatus::Missing => {
                    let _ = writeln!(
                        out,
                        "{} {:35} -> {}",
                        "[-]".red(),
                        finding.name,
                        "MISSING".red()
                    );
                }
            }
        }

        let _ = writeln!(out, "\n{}", "=== DEPRECATED HEADERS ===".magenta().bold());
        if self.deprecated_found.is_empty() {
            let _ = writeln!(out, "{} No deprecated headers found", "[+]".green());
        } else {
            for finding in &self.deprecated {
                if let DeprecatedStatus::Found(value) = &finding.status {
                    let _ = writeln!(
                        out,
                        "{} {:35} -> {} {}",
                        "[!]".yellow(),
                        finding.name,
                        value,
                        "(DEPRECATED)".yellow()
                    );
                }
            }
        }

        let _ = writeln!(out, "\n{}", "=== SUMMARY ===".cyan().bold());
        let _ = writeln!(
            out,
            "Present : {} / {}",
            self.present_count,
            self.checklist.len()
        );
        let _ = writeln!(out, "Missing : {}", self.missing_count);
        if !self.missing.is_empty() {
            let _ = writeln!(out, "Missing headers: {}", self.missing.join(", "));
        }

        let _ = writeln!(out, "\n{}", "=== REFERENCES ===".cyan().bold());
        let _ = writeln!(out, "{}", self.mode.reference_url());

        let _ = writeln!(out, "\n{}", "=== NOTES ===".yellow().bold());
        let _ = writeln!(
            out,
            "- The CSP frame-ancestors directive obsoletes X-Frame-Options; when both\n  are present, frame-ancestors wins and X-Frame-Options is ignored."
        );
        let _ = writeln!(
            out,
            "- Clear-Site-Data is recommended on logout and session-expiry responses."
        );

        out
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
