//! Boundary to the print spooler
//!
//! The spooler is reached only through three external commands. Nothing is
//! cached: every call re-runs the command so the answer reflects the live
//! state of CUPS.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::command::PrintCommand;
use crate::{Error, Result};

/// Operations the tool needs from a print spooler
pub trait Spooler {
    /// Names of the registered printers, in the order the spooler reports them
    fn list_printers(&self) -> Result<Vec<String>>;

    /// Raw option lines reported for a printer
    fn list_options(&self, printer: &str) -> Result<Vec<String>>;

    /// Submit a job, discarding whatever the submit command prints
    fn submit(&self, command: &PrintCommand) -> Result<()>;
}

/// Names of the spooler executables, resolved on `PATH`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpoolerCommands {
    pub list_command: String,
    pub options_command: String,
    pub submit_command: String,
}

impl Default for SpoolerCommands {
    fn default() -> Self {
        Self {
            list_command: "lpstat".to_string(),
            options_command: "lpoptions".to_string(),
            submit_command: "lp".to_string(),
        }
    }
}

/// Spooler backed by the CUPS command-line tools
#[derive(Debug, Clone, Default)]
pub struct CupsSpooler {
    commands: SpoolerCommands,
}

impl CupsSpooler {
    /// Create a spooler that runs the given executables
    pub fn new(commands: SpoolerCommands) -> Self {
        Self { commands }
    }

    /// Run a query command and return its standard output
    fn query(&self, program: &str, args: &[&str]) -> Result<String> {
        let executable = locate(program)?;
        debug!("Running {} {}", executable.display(), args.join(" "));

        let output = Command::new(&executable)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::spooler_unavailable(program, e))?;

        if !output.status.success() {
            return Err(Error::spooler_query_failed(
                program,
                output.status,
                &output.stderr,
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Spooler for CupsSpooler {
    fn list_printers(&self) -> Result<Vec<String>> {
        let stdout = self.query(&self.commands.list_command, &["-a"])?;
        let printers = parse_printer_list(&stdout);
        debug!("Spooler reports {} printer(s)", printers.len());
        Ok(printers)
    }

    fn list_options(&self, printer: &str) -> Result<Vec<String>> {
        let stdout = self.query(&self.commands.options_command, &["-p", printer, "-l"])?;
        Ok(stdout.lines().map(str::to_string).collect())
    }

    fn submit(&self, command: &PrintCommand) -> Result<()> {
        let program = command.program();
        let executable = locate(program).map_err(Error::submission_failed)?;
        debug!("Submitting: {command}");

        let status = Command::new(&executable)
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| Error::submission_failed(format!("could not run '{program}': {e}")))?;

        if !status.success() {
            return Err(Error::submission_failed(format!(
                "'{program}' exited with {status}"
            )));
        }

        Ok(())
    }
}

/// Find an executable on `PATH`
fn locate(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|e| Error::spooler_unavailable(program, e))
}

/// Parse printer-listing output: one printer per line, first token is the name
pub fn parse_printer_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_printer_list() {
        let output = "\
Office accepting requests since Mon 12 Feb 2024 09:15:02 CET
Lab_Color accepting requests since Tue 13 Feb 2024 10:00:00 CET
";
        assert_eq!(parse_printer_list(output), vec!["Office", "Lab_Color"]);
    }

    #[test]
    fn test_parse_printer_list_skips_blank_lines() {
        let output = "\nOffice accepting requests\n   \n";
        assert_eq!(parse_printer_list(output), vec!["Office"]);
    }

    #[test]
    fn test_parse_printer_list_empty() {
        assert!(parse_printer_list("").is_empty());
    }

    #[test]
    fn test_default_commands() {
        let commands = SpoolerCommands::default();
        assert_eq!(commands.list_command, "lpstat");
        assert_eq!(commands.options_command, "lpoptions");
        assert_eq!(commands.submit_command, "lp");
    }

    #[test]
    fn test_missing_executable_is_spooler_unavailable() {
        let spooler = CupsSpooler::new(SpoolerCommands {
            list_command: "lpwalk-definitely-not-installed".to_string(),
            ..SpoolerCommands::default()
        });

        match spooler.list_printers() {
            Err(Error::SpoolerUnavailable { program, .. }) => {
                assert_eq!(program, "lpwalk-definitely-not-installed");
            }
            other => panic!("Expected SpoolerUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_submit_executable_is_submission_failure() {
        let spooler = CupsSpooler::default();
        let command = PrintCommand::new("lpwalk-definitely-not-installed", vec!["--".into()]);

        assert!(matches!(
            spooler.submit(&command),
            Err(Error::SubmissionFailed { .. })
        ));
    }
}
