/// Utility modules for the triage tools
///
/// This module contains helpers for file handling, logging setup, and
/// formatting of statistics output.

pub mod file_utils;
pub mod logging;
pub mod output_formatter;
