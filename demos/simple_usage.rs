/// Simple example demonstrating how to use the Dart Triage library

use anyhow::Result;
use dart_triage::analyze_report;

fn main() -> Result<()> {
    // Path to report file for analysis
    let report_path = "demos/sample_report.txt";

    // Create sample report
    std::fs::write(
        report_path,
        r#"Analyzing example_app...
  warning • Unused variable 'x' • lib/main.dart:10:5 • unused_local_variable
   info • Prefer const constructors • lib/main.dart:22:9 • prefer_const_constructors
   info • Prefer const constructors • lib/pages/home.dart:5:3 • prefer_const_constructors
  error • Undefined name 'foo' • lib/pages/home.dart:9:7 • undefined_identifier
4 issues found.
"#,
    )?;

    println!("Analyzing report: {}", report_path);

    // Parse and aggregate the report
    let stats = analyze_report(report_path)?;

    // Display results
    println!("\nTotal issues: {}", stats.total());

    println!("\nPer file:");
    for bucket in stats.top_files(20) {
        println!("{:4}  {}", bucket.len(), bucket.key);
    }

    println!("\nPer diagnostic code:");
    for bucket in stats.codes_ranked() {
        println!("{:4}  {}", bucket.len(), bucket.key);
    }

    Ok(())
}
