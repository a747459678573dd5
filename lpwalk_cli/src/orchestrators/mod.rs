//! Command orchestrators
//!
//! Orchestrators coordinate between the CLI layer and the core library:
//! they own the sequencing of a run, while the core functions stay free of
//! terminal and process concerns.

pub mod print_orchestrator;

pub use print_orchestrator::{PrintOrchestrator, PrintOutcome, PrintRequest, PrintStage};
