/// Logging setup shared by both command-line tools

use std::fs::File;

use anyhow::Result;
use log::LevelFilter;

/// Set up logging with a timestamped format and an optional file target
///
/// # Arguments
///
/// * `level` - Minimum level to log
/// * `log_file` - Path of the log file; falls back to stderr when the file
///   cannot be created
pub fn setup_logging(level: LevelFilter, log_file: &str) -> Result<()> {
    // Configure logging
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(level);

    // Set format
    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // Add file output
    if let Ok(file) = File::create(log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Initialize logger
    builder.init();

    Ok(())
}
