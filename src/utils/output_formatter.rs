/// Output formatter for report statistics
///
/// This module handles formatting the aggregated issue statistics for the
/// console and exporting them in machine-readable formats (JSON, CSV).

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::{json, Value};

use crate::core::aggregator::{ReportStats, SeverityBreakdown};
use crate::core::extractor::IssueRecord;

/// Format report statistics for console output
///
/// # Arguments
///
/// * `stats` - Aggregated statistics for one report
/// * `top_files` - How many per-file buckets to show
/// * `use_markdown` - Whether to wrap the output in markdown triple backticks
///
/// # Returns
///
/// Formatted string for console output
pub fn format_stats(stats: &ReportStats, top_files: usize, use_markdown: bool) -> String {
    let mut output = String::new();

    // Start markdown code block if requested
    if use_markdown {
        output.push_str("```\n");
    }

    if stats.total() == 0 {
        output.push_str("No issues parsed.\n");
    } else {
        // Per-file table, largest buckets first
        let heading = format!("Per-file issue counts (top {})", top_files);
        output.push_str(&format!("{}\n", heading.yellow().bold()));
        for bucket in stats.top_files(top_files) {
            output.push_str(&format!("{:4}  {}\n", bucket.len(), bucket.key));
        }

        // Per-code table with nested severity counts
        output.push_str(&format!("\n{}\n", "Issues by diagnostic code".yellow().bold()));
        for bucket in stats.codes_ranked() {
            let breakdown = SeverityBreakdown::tally(&bucket.issues);
            let levels = breakdown
                .entries()
                .iter()
                .map(|(severity, count)| format!("{}: {}", severity, count))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("{:4}  {:<40}  ({})\n", bucket.len(), bucket.key, levels));
        }

        output.push_str(&format!("\n{} {}\n", "Total issues:".green(), stats.total()));
    }

    // End markdown code block if requested
    if use_markdown {
        output.push_str("```\n");
    }

    output
}

/// Export report statistics to a JSON file
///
/// The payload carries the total, both frequency tables (per-code with its
/// severity breakdown), and the full issue list.
///
/// # Arguments
///
/// * `stats` - Aggregated statistics for one report
/// * `output_path` - Path where the JSON file will be written
pub fn export_stats_json(stats: &ReportStats, output_path: &Path) -> Result<()> {
    let by_file: Vec<Value> = stats
        .by_file()
        .iter()
        .map(|bucket| json!({ "file": bucket.key, "count": bucket.len() }))
        .collect();

    let by_code: Vec<Value> = stats
        .by_code()
        .iter()
        .map(|bucket| {
            json!({
                "code": bucket.key,
                "count": bucket.len(),
                "severities": SeverityBreakdown::tally(&bucket.issues),
            })
        })
        .collect();

    let payload = json!({
        "total": stats.total(),
        "by_file": by_file,
        "by_code": by_code,
        "issues": stats.issues(),
    });

    // Write to file
    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, &payload).context("Failed to write JSON data")?;

    Ok(())
}

/// Export the raw issue records to a CSV file
///
/// # Arguments
///
/// * `issues` - Issue records in report order
/// * `output_path` - Path where the CSV file will be written
pub fn export_issues_csv(issues: &[IssueRecord], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;

    let mut writer = csv::Writer::from_writer(file);

    // Write header
    writer
        .write_record(["Severity", "Message", "Location", "Code"])
        .context("Failed to write CSV header")?;

    // Write all issues
    for issue in issues {
        writer
            .write_record([
                issue.severity.to_string().as_str(),
                issue.message.as_str(),
                issue.location.as_str(),
                issue.code.as_str(),
            ])
            .context("Failed to write CSV record")?;
    }

    // Flush the writer to ensure all data is written
    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}
