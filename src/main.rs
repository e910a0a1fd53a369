/// Report Stats - frequency statistics over analyzer reports
///
/// The main entry point for the report statistics tool. It reads one
/// `flutter analyze` report, extracts the issue records, and prints the
/// ranked per-file and per-code frequency tables.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};

use dart_triage::core::aggregator::ReportStats;
use dart_triage::core::extractor::extract_issues;
use dart_triage::utils::logging::setup_logging;
use dart_triage::utils::output_formatter;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "report_stats",
    author = "Your Name <your.email@example.com>",
    version = "0.1.0",
    about = "Frequency statistics over flutter analyze output",
    long_about = "Parses the textual output of `flutter analyze` and prints:
- a per-file issue count table (largest offenders first)
- a per-code table with a nested severity breakdown
- the total issue count

Lines that do not match the analyzer's four-field format are ignored."
)]
struct Args {
    /// Path to the saved analyzer report
    #[arg(value_name = "REPORT_PATH")]
    report_path: PathBuf,

    /// Number of entries in the per-file table (default: 20)
    #[arg(long = "top", default_value = "20")]
    top: usize,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Export statistics to JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Export raw issue records to CSV file
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: report_stats.log)
    #[arg(long = "log-file", default_value = "report_stats.log")]
    log_file: String,
}

/// Main entry point function
fn main() -> Result<()> {
    // Record the start time
    let start_time = Instant::now();

    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let _ = setup_logging(args.log_level, &args.log_file);

    // Read the report text
    info!("Reading report: {}", args.report_path.display());
    let report = std::fs::read_to_string(&args.report_path)
        .with_context(|| format!("Failed to read report: {}", args.report_path.display()))?;

    // Extract and aggregate
    let issues = extract_issues(&report);
    info!("Extracted {} issue records", issues.len());
    let stats = ReportStats::from_issues(issues);

    // Export results if requested
    if let Some(json_path) = &args.json {
        output_formatter::export_stats_json(&stats, json_path)?;
        info!("Exported JSON statistics to {}", json_path.display());
    }

    if let Some(csv_path) = &args.csv {
        output_formatter::export_issues_csv(stats.issues(), csv_path)?;
        info!("Exported CSV issues to {}", csv_path.display());
    }

    // Print results to console if not in quiet mode
    if !args.quiet {
        print!("{}", output_formatter::format_stats(&stats, args.top, args.md));
    }

    info!(
        "Report processed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
