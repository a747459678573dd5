//! Test utilities for lpwalk
//!
//! This crate provides a scriptable spooler, a canned printer prompt and a
//! directory tree builder for testing discovery and job construction without
//! a running print server.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::TestTree;
pub use mocks::{MockPrompt, MockSpooler, SpoolerCall};
