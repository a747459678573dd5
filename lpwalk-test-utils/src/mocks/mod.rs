//! Mock implementations for testing

mod prompt;
mod spooler;

pub use prompt::MockPrompt;
pub use spooler::{MockSpooler, SpoolerCall};
