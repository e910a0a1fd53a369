/// File handling utilities
///
/// This module provides the read/write boundary around the pure rewrite
/// logic. Failures here are the only hard errors in the pipeline and carry
/// the offending path plus the underlying cause.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Error when a source file cannot be read or written back
#[derive(Debug, thiserror::Error)]
pub enum SourceIoError {
    /// The file could not be read as UTF-8 text
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The rewritten content could not be written back
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the full UTF-8 content of a source file
///
/// # Arguments
///
/// * `path` - Path to the file
///
/// # Returns
///
/// The file content, or a `SourceIoError::Read` naming the path
pub fn read_source(path: &Path) -> Result<String, SourceIoError> {
    fs::read_to_string(path).map_err(|source| SourceIoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite a source file with new content
///
/// # Arguments
///
/// * `path` - Path to the file
/// * `content` - Replacement content
///
/// # Returns
///
/// Unit on success, or a `SourceIoError::Write` naming the path
pub fn write_source(path: &Path, content: &str) -> Result<(), SourceIoError> {
    debug!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content).map_err(|source| SourceIoError::Write {
        path: path.to_path_buf(),
        source,
    })
}
