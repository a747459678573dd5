use colored::*;
use lpwalk_core::Error as CoreError;
use std::error::Error as StdError;
use std::fmt;

/// CLI-specific error type with semantic exit codes
#[derive(Debug)]
pub struct CliError {
    /// The main error message
    message: String,

    /// Error category for exit code determination
    category: ErrorCategory,

    /// Suggestions for recovery, shown with `--debug`
    pub suggestions: Vec<String>,

    /// Source error if any
    source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Error categories that map to exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCategory {
    General,
    Misuse,
    Spooler,
    Filesystem,
}

/// Semantic exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    Misuse = 2,
    SpoolerError = 3,
    FilesystemError = 4,
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    fn with_category(message: &str, category: ErrorCategory) -> Self {
        Self {
            message: message.to_string(),
            category,
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Create a general error
    pub fn general(message: &str) -> Self {
        Self::with_category(message, ErrorCategory::General)
    }

    /// Create a command misuse error
    pub fn misuse(message: &str) -> Self {
        Self::with_category(message, ErrorCategory::Misuse)
            .with_suggestion("Run 'lpwalk --help' for usage information")
    }

    /// Create a spooler error
    pub fn spooler(message: &str) -> Self {
        Self::with_category(message, ErrorCategory::Spooler)
            .with_suggestion("Check that CUPS is installed and the scheduler is running")
            .with_suggestion("Run 'lpstat -a' to list the printers accepting jobs")
    }

    /// Create a filesystem error
    pub fn filesystem(message: &str) -> Self {
        let mut error = Self::with_category(message, ErrorCategory::Filesystem);

        if message.contains("not found") {
            error = error.with_suggestion("Check if the file or directory exists");
        } else if message.contains("No files matching") {
            error = error
                .with_suggestion("Use --include-hidden to also search hidden entries")
                .with_suggestion("Use --dry-run to inspect what would be printed");
        } else if message.contains("permission") || message.contains("denied") {
            error = error.with_suggestion("Check file permissions");
        }

        error
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestions.push(suggestion.to_string());
        self
    }

    pub fn with_source(mut self, source: Box<dyn StdError + Send + Sync>) -> Self {
        self.source = Some(source);
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.category {
            ErrorCategory::General => ExitCode::GeneralError,
            ErrorCategory::Misuse => ExitCode::Misuse,
            ErrorCategory::Spooler => ExitCode::SpoolerError,
            ErrorCategory::Filesystem => ExitCode::FilesystemError,
        }
    }

    /// Format the error for user display
    ///
    /// Outside debug mode this is the single line `Error: <message>`.
    pub fn format_for_user(&self, debug: bool) -> String {
        let mut output = format!("{}: {}\n", "Error".red(), self.message);

        if !debug {
            return output;
        }

        // Error chain in debug mode
        if let Some(source) = &self.source {
            output.push_str("\nCaused by:\n");
            let mut current: Option<&dyn StdError> = Some(source.as_ref());
            let mut level = 1;

            while let Some(err) = current {
                output.push_str(&format!("  {level}: {err}\n"));
                current = err.source();
                level += 1;
            }
        }

        if !self.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in &self.suggestions {
                output.push_str(&format!("  - {suggestion}\n"));
            }
        }

        output
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();
        let cli_error = match &error {
            CoreError::InvalidPattern { .. }
            | CoreError::StaplingUnsupported { .. }
            | CoreError::StaplePositionUnavailable { .. } => Self::misuse(&message),
            CoreError::UnknownPrinter { available, .. } => Self::misuse(&message)
                .with_suggestion(&format!("Available printers: {}", available.join(", "))),
            CoreError::SpoolerUnavailable { .. }
            | CoreError::SpoolerQueryFailed { .. }
            | CoreError::NoPrintersAvailable
            | CoreError::MalformedCapability { .. } => Self::spooler(&message),
            CoreError::ResourceNotFound { .. }
            | CoreError::UnsupportedResource { .. }
            | CoreError::NoMatchingFiles { .. }
            | CoreError::Io { .. } => Self::filesystem(&message),
            CoreError::PrinterSelectionFailed { .. } => Self::general(&message)
                .with_suggestion("Pass --printer NAME when running without a terminal"),
            CoreError::SubmissionFailed { .. } => Self::general(&message),
        };

        cli_error.with_source(Box::new(error))
    }
}

/// Convert anyhow errors to CLI errors
impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        // `{:#}` keeps the context chain on one line
        Self::general(&format!("{error:#}"))
    }
}
