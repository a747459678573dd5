//! Print command construction
//!
//! Builds the exact argument vector handed to the submit command. Arguments
//! are passed to the process directly, never through a shell, so file names
//! containing spaces or quotes stay single arguments.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

use crate::stapling::StapleOption;

/// Layout options applied to every job: long-edge duplex, A4, collated
pub const LAYOUT_OPTIONS: [&str; 3] = ["sides=two-sided-long-edge", "media=A4", "collate=true"];

/// Marker separating options from file operands
pub const END_OF_OPTIONS: &str = "--";

/// A fully built submit-job invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintCommand {
    program: String,
    args: Vec<OsString>,
}

impl PrintCommand {
    /// Wrap an already built argument list
    pub fn new(program: impl Into<String>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Executable to run
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments after the program name
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// File operands, i.e. everything after the end-of-options marker
    pub fn files(&self) -> &[OsString] {
        match self.args.iter().position(|arg| arg == END_OF_OPTIONS) {
            Some(marker) => &self.args[marker + 1..],
            None => &[],
        }
    }

    /// Values of every `-o` option, in order
    pub fn options(&self) -> Vec<&OsStr> {
        self.args
            .iter()
            .take_while(|arg| *arg != END_OF_OPTIONS)
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|pair| pair[0] == "-o")
            .map(|pair| pair[1].as_os_str())
            .collect()
    }
}

impl fmt::Display for PrintCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(OsStr::new(&self.program)))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Build the submit-job argument list
///
/// The stapling option is appended only when one was resolved and stapling
/// was requested.
pub fn build_command(
    program: &str,
    printer: &str,
    staple: bool,
    staple_option: Option<&StapleOption>,
    files: &[PathBuf],
) -> PrintCommand {
    let mut args: Vec<OsString> = vec!["-d".into(), printer.into()];

    for option in LAYOUT_OPTIONS {
        args.push("-o".into());
        args.push(option.into());
    }

    if staple && let Some(option) = staple_option {
        args.push("-o".into());
        args.push(option.to_string().into());
    }

    args.push(END_OF_OPTIONS.into());
    args.extend(files.iter().map(|file| file.as_os_str().to_os_string()));

    PrintCommand::new(program, args)
}

/// Quote an argument for display the way a POSIX shell would need it
fn quote(arg: &OsStr) -> Cow<'_, str> {
    let text = arg.to_string_lossy();
    let plain = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));

    if plain {
        text
    } else {
        Cow::Owned(format!("'{}'", text.replace('\'', r"'\''")))
    }
}
