//! Mock spooler for testing

use lpwalk_core::{Error, PrintCommand, Result, Spooler};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Calls received by a [`MockSpooler`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpoolerCall {
    ListPrinters,
    ListOptions(String),
    Submit(PrintCommand),
}

/// Scriptable stand-in for the CUPS command-line tools
///
/// # Examples
///
/// ```rust
/// use lpwalk_core::Spooler;
/// use lpwalk_test_utils::MockSpooler;
///
/// let spooler = MockSpooler::new()
///     .with_printers(["Office", "Lab"])
///     .with_options("Office", ["Staples/Stapling: *None left right"]);
///
/// assert_eq!(spooler.list_printers().unwrap(), vec!["Office", "Lab"]);
/// assert_eq!(spooler.list_options("Office").unwrap().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockSpooler {
    behavior: Arc<Mutex<MockBehavior>>,
}

#[derive(Debug, Clone, Default)]
struct MockBehavior {
    printers: Vec<String>,
    options: HashMap<String, Vec<String>>,
    unavailable: bool,
    query_failure: Option<String>,
    submit_failure: Option<String>,
    calls: Vec<SpoolerCall>,
}

impl MockSpooler {
    /// Create a spooler with no printers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register printers, in listing order
    pub fn with_printers<I, S>(self, printers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.behavior().printers = printers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the option lines reported for one printer
    pub fn with_options<I, S>(self, printer: &str, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.behavior()
            .options
            .insert(printer.to_string(), lines.into_iter().map(Into::into).collect());
        self
    }

    /// Behave as if the spooler executables were not installed
    pub fn unavailable(self) -> Self {
        self.behavior().unavailable = true;
        self
    }

    /// Make every query exit with a failure and the given stderr
    pub fn failing_queries(self, stderr: &str) -> Self {
        self.behavior().query_failure = Some(stderr.to_string());
        self
    }

    /// Make job submission fail with the given reason
    pub fn failing_submission(self, reason: &str) -> Self {
        self.behavior().submit_failure = Some(reason.to_string());
        self
    }

    /// All calls received so far
    pub fn calls(&self) -> Vec<SpoolerCall> {
        self.behavior().calls.clone()
    }

    /// Commands passed to `submit`, successful or not
    pub fn submitted(&self) -> Vec<PrintCommand> {
        self.behavior()
            .calls
            .iter()
            .filter_map(|call| match call {
                SpoolerCall::Submit(command) => Some(command.clone()),
                _ => None,
            })
            .collect()
    }

    fn behavior(&self) -> std::sync::MutexGuard<'_, MockBehavior> {
        self.behavior.lock().unwrap()
    }

    fn check_query(behavior: &MockBehavior, program: &str) -> Result<()> {
        if behavior.unavailable {
            return Err(Error::spooler_unavailable(program, "cannot find binary path"));
        }
        if let Some(stderr) = &behavior.query_failure {
            return Err(Error::spooler_query_failed(
                program,
                "exit status: 1",
                stderr.as_bytes(),
            ));
        }
        Ok(())
    }
}

impl Spooler for MockSpooler {
    fn list_printers(&self) -> Result<Vec<String>> {
        let mut behavior = self.behavior();
        behavior.calls.push(SpoolerCall::ListPrinters);
        Self::check_query(&behavior, "lpstat")?;
        Ok(behavior.printers.clone())
    }

    fn list_options(&self, printer: &str) -> Result<Vec<String>> {
        let mut behavior = self.behavior();
        behavior
            .calls
            .push(SpoolerCall::ListOptions(printer.to_string()));
        Self::check_query(&behavior, "lpoptions")?;
        Ok(behavior.options.get(printer).cloned().unwrap_or_default())
    }

    fn submit(&self, command: &PrintCommand) -> Result<()> {
        let mut behavior = self.behavior();
        behavior.calls.push(SpoolerCall::Submit(command.clone()));

        if behavior.unavailable {
            return Err(Error::submission_failed(format!(
                "'{}' not found",
                command.program()
            )));
        }
        match &behavior.submit_failure {
            Some(reason) => Err(Error::submission_failed(reason)),
            None => Ok(()),
        }
    }
}
