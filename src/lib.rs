/// Dart Triage - batch triage utilities for Flutter projects
///
/// This library provides two independent text-processing pipelines: parsing
/// `flutter analyze` report output into structured issue records with
/// frequency statistics, and rewriting Dart source files so that debug print
/// statements only run in debug mode.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::aggregator::{Bucket, ReportStats, SeverityBreakdown};
pub use crate::core::extractor::{extract_issues, IssueRecord, Severity};
pub use crate::core::rewriter::rewrite_source;
pub use crate::utils::file_utils::SourceIoError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse an analyzer report file and aggregate its statistics
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `report_path` - Path to a file holding raw `flutter analyze` output
///
/// # Returns
///
/// Aggregated statistics over every report line that parsed as an issue
pub fn analyze_report<P: AsRef<std::path::Path>>(report_path: P) -> anyhow::Result<ReportStats> {
    use anyhow::Context;

    let report = std::fs::read_to_string(report_path.as_ref()).with_context(|| {
        format!("Failed to read report: {}", report_path.as_ref().display())
    })?;

    let issues = extract_issues(&report);
    Ok(ReportStats::from_issues(issues))
}

/// Rewrite one Dart source file in place, guarding its print statements
///
/// # Arguments
///
/// * `path` - Path to the Dart source file
///
/// # Returns
///
/// Whether the rewrite changed the file content. The file is written back
/// either way (overwrite semantics).
pub fn guard_file<P: AsRef<std::path::Path>>(path: P) -> Result<bool, SourceIoError> {
    use crate::utils::file_utils::{read_source, write_source};

    let path = path.as_ref();
    let original = read_source(path)?;
    let rewritten = rewrite_source(&original);
    let changed = rewritten != original;

    write_source(path, &rewritten)?;

    Ok(changed)
}

/// Command-line application functionality
pub mod app {
    use std::path::Path;

    use crate::utils::file_utils::SourceIoError;

    /// Outcome of guarding one file in a batch
    pub type GuardOutcome = (String, Result<bool, SourceIoError>);

    /// Rewrite a batch of Dart source files sequentially
    ///
    /// Each file fully succeeds or fully fails on its own; a failure is
    /// recorded in that file's outcome and the batch continues.
    ///
    /// # Arguments
    ///
    /// * `paths` - Paths of the files to rewrite
    ///
    /// # Returns
    ///
    /// One outcome per input file, in input order
    pub fn guard_files<P: AsRef<Path>>(paths: &[P]) -> Vec<GuardOutcome> {
        let mut outcomes = Vec::with_capacity(paths.len());

        for path in paths {
            let path_str = path.as_ref().to_string_lossy().to_string();
            let outcome = crate::guard_file(path.as_ref());
            outcomes.push((path_str, outcome));
        }

        outcomes
    }
}
