/// Issue aggregation and ranking
///
/// This file contains the grouping of extracted issue records into per-file
/// and per-code frequency tables, along with the ranked views used for
/// console display and export.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::extractor::{IssueRecord, Severity};

/// Ordered sequence of issue records sharing one grouping key
#[derive(Debug, Clone, Serialize)]
pub struct Bucket {
    /// The grouping key (file path prefix or diagnostic code)
    pub key: String,
    /// Issues in this bucket, in report encounter order
    pub issues: Vec<IssueRecord>,
}

impl Bucket {
    /// Number of issues in this bucket
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether this bucket holds no issues
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Nested severity counts for one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityBreakdown {
    pub info: usize,
    pub warning: usize,
    pub error: usize,
}

impl SeverityBreakdown {
    /// Count severities across a slice of issues
    pub fn tally(issues: &[IssueRecord]) -> Self {
        let mut breakdown = SeverityBreakdown::default();
        for issue in issues {
            match issue.severity {
                Severity::Info => breakdown.info += 1,
                Severity::Warning => breakdown.warning += 1,
                Severity::Error => breakdown.error += 1,
            }
        }
        breakdown
    }

    /// Non-zero counts in severity order
    pub fn entries(&self) -> Vec<(Severity, usize)> {
        let all = [
            (Severity::Info, self.info),
            (Severity::Warning, self.warning),
            (Severity::Error, self.error),
        ];
        all.into_iter().filter(|(_, count)| *count > 0).collect()
    }
}

/// Frequency statistics over one analyzer report
///
/// Built in a single pass after extraction completes and read-only
/// thereafter. Buckets keep first-appearance order so that ranking ties
/// resolve to report order.
#[derive(Debug, Clone, Serialize)]
pub struct ReportStats {
    issues: Vec<IssueRecord>,
    by_file: Vec<Bucket>,
    by_code: Vec<Bucket>,
}

impl ReportStats {
    /// Build the grouping tables from an extracted issue sequence
    ///
    /// # Arguments
    ///
    /// * `issues` - Issue records in report order
    ///
    /// # Returns
    ///
    /// Statistics with every issue in exactly one per-file bucket and exactly
    /// one per-code bucket. An empty sequence yields empty tables.
    pub fn from_issues(issues: Vec<IssueRecord>) -> Self {
        let by_file = group_by(&issues, |issue| issue.file_key().to_string());
        let by_code = group_by(&issues, |issue| issue.code.clone());

        ReportStats {
            issues,
            by_file,
            by_code,
        }
    }

    /// Total number of extracted issues
    pub fn total(&self) -> usize {
        self.issues.len()
    }

    /// The full extracted issue sequence, in report order
    pub fn issues(&self) -> &[IssueRecord] {
        &self.issues
    }

    /// Per-file buckets in first-appearance order
    pub fn by_file(&self) -> &[Bucket] {
        &self.by_file
    }

    /// Per-code buckets in first-appearance order
    pub fn by_code(&self) -> &[Bucket] {
        &self.by_code
    }

    /// Per-file buckets ranked by descending size, truncated to `top`
    pub fn top_files(&self, top: usize) -> Vec<&Bucket> {
        let mut ranked = rank_by_size(&self.by_file);
        ranked.truncate(top);
        ranked
    }

    /// All per-code buckets ranked by descending size
    pub fn codes_ranked(&self) -> Vec<&Bucket> {
        rank_by_size(&self.by_code)
    }
}

/// Group issues under a derived key, preserving first-appearance bucket order
fn group_by<F>(issues: &[IssueRecord], key_of: F) -> Vec<Bucket>
where
    F: Fn(&IssueRecord) -> String,
{
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for issue in issues {
        let key = key_of(issue);
        match index.get(&key) {
            Some(&slot) => buckets[slot].issues.push(issue.clone()),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(Bucket {
                    key,
                    issues: vec![issue.clone()],
                });
            }
        }
    }

    buckets
}

/// Sort buckets by descending size
///
/// The sort is stable, so equal-size buckets keep their first-appearance
/// relative order.
fn rank_by_size(buckets: &[Bucket]) -> Vec<&Bucket> {
    let mut ranked: Vec<&Bucket> = buckets.iter().collect();
    ranked.sort_by(|a, b| b.len().cmp(&a.len()));
    ranked
}
