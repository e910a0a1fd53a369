/// Analyzer report extraction
///
/// This file contains the parsing of raw `flutter analyze` output into typed
/// issue records. Each report line is matched whole against the four-field
/// separator pattern; lines of any other shape are skipped without error.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::patterns::ISSUE_LINE;

/// Severity level reported by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational lint
    Info,
    /// Warning
    Warning,
    /// Hard error
    Error,
}

/// Error when a string is not one of the three recognized severity literals
#[derive(Debug, thiserror::Error)]
#[error("unrecognized severity: {0}")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", label)
    }
}

/// One parsed diagnostic line from an analyzer report
///
/// All fields are non-empty and trimmed when a line matches. Records are
/// immutable once extracted and keep the order they appeared in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    /// Severity level of the diagnostic
    pub severity: Severity,
    /// Free-text description
    pub message: String,
    /// Position reference, structurally `file_path[:line[:column]]`
    pub location: String,
    /// Diagnostic identifier, e.g. `unused_local_variable`
    pub code: String,
}

impl IssueRecord {
    /// Grouping key for the per-file table: the location up to (but not
    /// including) the first `:`, or the whole location when none is present.
    pub fn file_key(&self) -> &str {
        self.location.split(':').next().unwrap_or(&self.location)
    }
}

/// Extract issue records from the full text of an analyzer report
///
/// # Arguments
///
/// * `report` - Raw multi-line report text
///
/// # Returns
///
/// All matching issue records in input order. Non-matching lines are skipped
/// silently; empty or entirely malformed input yields an empty vector.
pub fn extract_issues(report: &str) -> Vec<IssueRecord> {
    let mut issues = Vec::new();

    for line in report.split('\n') {
        if let Some(caps) = ISSUE_LINE.captures(line) {
            // The pattern constrains capture 1 to the three literals, so the
            // parse cannot fail here; skip the line anyway if it ever does.
            let severity = match caps[1].parse::<Severity>() {
                Ok(severity) => severity,
                Err(_) => continue,
            };

            issues.push(IssueRecord {
                severity,
                message: caps[2].trim().to_string(),
                location: caps[3].trim().to_string(),
                code: caps[4].trim().to_string(),
            });
        }
    }

    issues
}
