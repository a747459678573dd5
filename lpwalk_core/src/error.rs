//! Error types for the lpwalk Core Library
//!
//! A single flat taxonomy: every failure the tool can report to the user has
//! exactly one variant here, so the CLI can map variants onto exit codes.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the lpwalk Core Library
#[derive(Error, Debug)]
pub enum Error {
    /// A spooler executable could not be located or started
    #[error("Spooler command '{program}' is not available: {reason}")]
    SpoolerUnavailable { program: String, reason: String },

    /// A spooler executable ran but reported failure
    #[error("Spooler command '{program}' failed ({status}){}", format_stderr(stderr))]
    SpoolerQueryFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// The requested printer is not registered with the spooler
    #[error("Printer called '{printer}' is not available")]
    UnknownPrinter {
        printer: String,
        available: Vec<String>,
    },

    /// The spooler reported no printers at all
    #[error("No printers are available")]
    NoPrintersAvailable,

    /// No printer was named and none could be chosen interactively
    #[error("Printer selection failed: {reason}")]
    PrinterSelectionFailed { reason: String },

    /// The file pattern is not a valid regular expression
    #[error("Regular expression error: {reason}: '{pattern}'")]
    InvalidPattern { pattern: String, reason: String },

    /// Stapling was requested from a printer that cannot staple
    #[error("Printer '{printer}' has no stapling functionality")]
    StaplingUnsupported { printer: String },

    /// The printer staples, but not at the requested position
    #[error("Printer '{printer}' offers no '{position}' staple position")]
    StaplePositionUnavailable { printer: String, position: String },

    /// An option line reported by the spooler could not be parsed
    #[error("Malformed option reported by printer '{printer}': '{line}'")]
    MalformedCapability { printer: String, line: String },

    /// Directory traversal produced nothing printable
    #[error("No files matching {} in '{}'", describe_pattern(pattern.as_deref()), root.display())]
    NoMatchingFiles {
        root: PathBuf,
        pattern: Option<String>,
    },

    /// The job submission command failed
    #[error("Printing failed: {reason}")]
    SubmissionFailed { reason: String },

    /// The resource given on the command line does not exist
    #[error("Path not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    /// The resource exists but is neither a regular file nor a directory
    #[error("Path is neither a file nor a directory: {}", path.display())]
    UnsupportedResource { path: PathBuf },

    /// Any other I/O failure tied to a path
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a spooler unavailable error
    pub fn spooler_unavailable(program: &str, reason: impl ToString) -> Self {
        Self::SpoolerUnavailable {
            program: program.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a spooler query failure from a finished process
    pub fn spooler_query_failed(program: &str, status: impl ToString, stderr: &[u8]) -> Self {
        Self::SpoolerQueryFailed {
            program: program.to_string(),
            status: status.to_string(),
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }

    /// Create an unknown printer error
    pub fn unknown_printer(printer: &str, available: &[String]) -> Self {
        Self::UnknownPrinter {
            printer: printer.to_string(),
            available: available.to_vec(),
        }
    }

    /// Create a printer selection error
    pub fn printer_selection_failed(reason: impl ToString) -> Self {
        Self::PrinterSelectionFailed {
            reason: reason.to_string(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a stapling unsupported error
    pub fn stapling_unsupported(printer: &str) -> Self {
        Self::StaplingUnsupported {
            printer: printer.to_string(),
        }
    }

    /// Create a staple position unavailable error
    pub fn staple_position_unavailable(printer: &str, position: &str) -> Self {
        Self::StaplePositionUnavailable {
            printer: printer.to_string(),
            position: position.to_string(),
        }
    }

    /// Create a malformed capability error
    pub fn malformed_capability(printer: &str, line: &str) -> Self {
        Self::MalformedCapability {
            printer: printer.to_string(),
            line: line.to_string(),
        }
    }

    /// Create a no matching files error
    pub fn no_matching_files(root: &Path, pattern: Option<&str>) -> Self {
        Self::NoMatchingFiles {
            root: root.to_path_buf(),
            pattern: pattern.map(str::to_string),
        }
    }

    /// Create a submission failure
    pub fn submission_failed(reason: impl ToString) -> Self {
        Self::SubmissionFailed {
            reason: reason.to_string(),
        }
    }

    /// Create an error from a standard I/O error on a path
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::ResourceNotFound {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Describe a pattern the way user-facing messages quote it
pub fn describe_pattern(pattern: Option<&str>) -> String {
    match pattern {
        Some(pattern) => format!("'{pattern}'"),
        None => "the given options".to_string(),
    }
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_pattern_message_names_pattern() {
        let error = Error::invalid_pattern("[a-", "unclosed character class");
        let message = error.to_string();
        assert!(message.contains("Regular expression error"));
        assert!(message.contains("unclosed character class"));
        assert!(message.contains("'[a-'"));
    }

    #[test]
    fn test_spooler_query_failed_trims_stderr() {
        let error = Error::spooler_query_failed("lpstat", "exit status: 1", b"  no scheduler\n");
        assert_eq!(
            error.to_string(),
            "Spooler command 'lpstat' failed (exit status: 1): no scheduler"
        );
    }

    #[test]
    fn test_spooler_query_failed_without_stderr() {
        let error = Error::spooler_query_failed("lpstat", "exit status: 1", b"");
        assert_eq!(error.to_string(), "Spooler command 'lpstat' failed (exit status: 1)");
    }

    #[test]
    fn test_no_matching_files_with_and_without_pattern() {
        let with_pattern = Error::no_matching_files(Path::new("docs"), Some(r"\.pdf$"));
        assert_eq!(with_pattern.to_string(), r"No files matching '\.pdf$' in 'docs'");

        let without_pattern = Error::no_matching_files(Path::new("docs"), None);
        assert_eq!(
            without_pattern.to_string(),
            "No files matching the given options in 'docs'"
        );
    }

    #[test]
    fn test_from_io_maps_not_found_to_resource_not_found() {
        let path = Path::new("/missing/report.pdf");
        let error = Error::from_io(path, io::Error::new(io::ErrorKind::NotFound, "gone"));

        match error {
            Error::ResourceNotFound { path: error_path } => assert_eq!(error_path, path),
            other => panic!("Expected ResourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_from_io_keeps_other_errors() {
        let path = Path::new("/root/secret");
        let error = Error::from_io(path, io::Error::new(io::ErrorKind::PermissionDenied, "denied"));

        assert!(matches!(error, Error::Io { .. }));
        assert!(std::error::Error::source(&error).is_some());
    }
}
