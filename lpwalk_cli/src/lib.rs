//! lpwalk CLI library
//!
//! Exposes the pieces of the `lpwalk` binary that integration tests drive
//! directly: configuration loading, the print orchestrator and the report
//! renderer.

pub mod args;
pub mod config;
pub mod error;
pub mod orchestrators;
pub mod output;
pub mod prompt;
pub mod terminal;
