//! User-facing reports for finished print runs

use colored::*;
use lpwalk_core::error::describe_pattern;
use std::io::{self, Write};
use std::path::Path;

use crate::orchestrators::PrintOutcome;

/// Write the report for `outcome`
///
/// Regular reports go to `out`; a failed submission is reported on `err`.
pub fn report(
    outcome: &PrintOutcome,
    verbose: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match outcome {
        PrintOutcome::DryRun { printer, command } => {
            writeln!(
                out,
                "The following files would be sent to printer '{}':",
                printer.bold()
            )?;
            for file in command.files() {
                writeln!(out, "  {}", Path::new(file).display())?;
            }
            if verbose {
                writeln!(out)?;
                writeln!(out, "Command: {command}")?;
            }
        }
        PrintOutcome::NothingToPrint {
            printer,
            root,
            pattern,
        } => {
            writeln!(
                out,
                "No files matching {} in '{}'; nothing would be sent to printer '{}'.",
                describe_pattern(pattern.as_deref()),
                root.display(),
                printer
            )?;
        }
        PrintOutcome::Submitted { printer, command } => {
            let count = command.files().len();
            writeln!(
                out,
                "{} {count} file{} to printer '{printer}'",
                "Sent".green(),
                if count == 1 { "" } else { "s" }
            )?;
            if verbose {
                writeln!(out, "Command: {command}")?;
            }
        }
        PrintOutcome::SubmissionFailed { error, .. } => {
            writeln!(err, "{}", error.to_string().red())?;
        }
    }

    Ok(())
}
