//! Print command orchestrator
//!
//! A run moves through a fixed sequence of stages:
//! `ResolvePrinter -> ResolveTargets -> BuildCommand -> DryRunReport | Submit -> Terminal`.
//! Every fatal condition is detected before anything is submitted, so a dry
//! run exercises the same validation as a real one.

use lpwalk_core::{
    Error, PathPattern, PrintCommand, PrinterPrompt, Result, Spooler, StaplePolicy,
    TraversalOptions, build_command, discover, negotiate_staple, resolve_printer,
};
use log::debug;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// What the user asked for on the command line
#[derive(Debug, Clone, Default)]
pub struct PrintRequest {
    pub resource: PathBuf,
    pub printer: Option<String>,
    pub pattern: Option<String>,
    pub include_hidden: bool,
    pub staple: bool,
    pub dry_run: bool,
}

/// Stages of a print run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintStage {
    ResolvePrinter,
    ResolveTargets,
    BuildCommand,
    DryRunReport,
    Submit,
    Terminal,
}

impl fmt::Display for PrintStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ResolvePrinter => "resolve printer",
            Self::ResolveTargets => "resolve targets",
            Self::BuildCommand => "build command",
            Self::DryRunReport => "dry-run report",
            Self::Submit => "submit",
            Self::Terminal => "done",
        };
        f.write_str(name)
    }
}

/// How a run ended when no fatal error occurred
#[derive(Debug)]
pub enum PrintOutcome {
    /// Nothing was submitted; `command` is what would have run
    DryRun {
        printer: String,
        command: PrintCommand,
    },
    /// Dry run over a directory without printable files
    NothingToPrint {
        printer: String,
        root: PathBuf,
        pattern: Option<String>,
    },
    Submitted {
        printer: String,
        command: PrintCommand,
    },
    SubmissionFailed {
        printer: String,
        command: PrintCommand,
        error: Error,
    },
}

impl PrintOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::SubmissionFailed { .. })
    }
}

/// Orchestrator for a single print run
pub struct PrintOrchestrator<'a> {
    spooler: &'a dyn Spooler,
    prompt: &'a dyn PrinterPrompt,
    policy: &'a dyn StaplePolicy,
    traversal: TraversalOptions,
    submit_program: String,
}

impl<'a> PrintOrchestrator<'a> {
    pub fn new(
        spooler: &'a dyn Spooler,
        prompt: &'a dyn PrinterPrompt,
        policy: &'a dyn StaplePolicy,
        submit_program: impl Into<String>,
    ) -> Self {
        Self {
            spooler,
            prompt,
            policy,
            traversal: TraversalOptions::default(),
            submit_program: submit_program.into(),
        }
    }

    /// Traversal settings other than `include_hidden`, which comes from the request
    pub fn with_traversal(mut self, traversal: TraversalOptions) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn run(&self, request: &PrintRequest) -> Result<PrintOutcome> {
        enter(PrintStage::ResolvePrinter);
        let printer = resolve_printer(self.spooler, request.printer.as_deref(), self.prompt)?;

        enter(PrintStage::ResolveTargets);
        let files = self.resolve_targets(request)?;

        if files.is_empty() && !request.dry_run {
            return Err(Error::no_matching_files(
                &request.resource,
                request.pattern.as_deref(),
            ));
        }

        enter(PrintStage::BuildCommand);
        // Negotiated even for an empty dry run so capability errors show up
        let staple_option =
            negotiate_staple(self.spooler, &printer, request.staple, self.policy)?;

        if files.is_empty() {
            enter(PrintStage::Terminal);
            return Ok(PrintOutcome::NothingToPrint {
                printer,
                root: request.resource.clone(),
                pattern: request.pattern.clone(),
            });
        }

        let command = build_command(
            &self.submit_program,
            &printer,
            request.staple,
            staple_option.as_ref(),
            &files,
        );

        if request.dry_run {
            enter(PrintStage::DryRunReport);
            enter(PrintStage::Terminal);
            return Ok(PrintOutcome::DryRun { printer, command });
        }

        enter(PrintStage::Submit);
        let outcome = match self.spooler.submit(&command) {
            Ok(()) => PrintOutcome::Submitted { printer, command },
            Err(error) => PrintOutcome::SubmissionFailed {
                printer,
                command,
                error,
            },
        };

        enter(PrintStage::Terminal);
        Ok(outcome)
    }

    /// A regular file is printed as is; a directory is walked and filtered
    fn resolve_targets(&self, request: &PrintRequest) -> Result<Vec<PathBuf>> {
        let resource = request.resource.as_path();
        let metadata = fs::metadata(resource).map_err(|e| Error::from_io(resource, e))?;

        if metadata.is_file() {
            debug!("Resource {} is a single file", resource.display());
            return Ok(vec![resource.to_path_buf()]);
        }

        if !metadata.is_dir() {
            return Err(Error::UnsupportedResource {
                path: resource.to_path_buf(),
            });
        }

        // Compile before walking so a bad pattern fails without touching the tree
        let pattern = request
            .pattern
            .as_deref()
            .map(PathPattern::new)
            .transpose()?;

        let options = self.traversal.with_include_hidden(request.include_hidden);
        discover(resource, options, pattern.as_ref())
    }
}

fn enter(stage: PrintStage) {
    debug!("Print stage: {stage}");
}
