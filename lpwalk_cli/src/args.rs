//! Command-line arguments

use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

/// Print all files located under RESOURCE.
///
/// Files without read permission and files in directories without read
/// permission are skipped.
#[derive(Parser, Debug)]
#[command(name = "lpwalk")]
#[command(author, version)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// File or directory to print
    #[arg(required_unless_present_any = ["completions", "show_config"])]
    pub resource: Option<PathBuf>,

    /// Show the files that would be printed without sending them
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Include hidden files and files in hidden subdirectories
    #[arg(short = 'h', long)]
    pub include_hidden: bool,

    /// Name of the printer to use (prompts when omitted)
    #[arg(short, long, value_name = "NAME")]
    pub printer: Option<String>,

    /// Regular expression selecting the files to print
    #[arg(short, long, value_name = "PATTERN")]
    pub regex: Option<String>,

    /// Staple the pages of each printed document
    #[arg(short, long)]
    pub staple: bool,

    /// Also show the print command in dry-run reports
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "lpwalk", "-d", "-h", "-s", "-p", "Office", "-r", r"\.pdf$", "docs",
        ])
        .unwrap();

        assert!(cli.dry_run);
        assert!(cli.include_hidden);
        assert!(cli.staple);
        assert_eq!(cli.printer.as_deref(), Some("Office"));
        assert_eq!(cli.regex.as_deref(), Some(r"\.pdf$"));
        assert_eq!(cli.resource, Some(PathBuf::from("docs")));
    }

    #[test]
    fn test_resource_is_required() {
        assert!(Cli::try_parse_from(["lpwalk", "--dry-run"]).is_err());
    }

    #[test]
    fn test_resource_not_required_for_completions() {
        let cli = Cli::try_parse_from(["lpwalk", "--completions", "bash"]).unwrap();
        assert!(cli.resource.is_none());
        assert_eq!(cli.completions, Some(Shell::Bash));
    }

    #[test]
    fn test_long_help_flag() {
        let error = Cli::try_parse_from(["lpwalk", "--help"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
