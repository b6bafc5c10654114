//! Error formatting for the binary's file handling.

use std::fmt;
use std::io;
use std::path::Path;

/// User-facing failure for the CLI's file reads and writes.
#[derive(Debug)]
pub struct CliError {
    msg: String,
    source: io::Error,
}

impl CliError {
    /// Wrap an I/O failure with the operation, the path and a hint for
    /// the errors a chart organizer actually runs into.
    pub fn new(operation: &str, path: &Path, err: io::Error) -> Self {
        let hint = match err.kind() {
            io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
            io::ErrorKind::PermissionDenied => "Check permissions or run as a different user.",
            _ => "Check permissions or free up disk space.",
        };
        Self {
            msg: format!("Error {} '{}': {}. {}", operation, path.display(), err, hint),
            source: err,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
