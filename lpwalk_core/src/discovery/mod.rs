//! File discovery module for finding the files to print
//!
//! This module walks a directory tree, optionally skipping hidden entries,
//! and narrows the result down to regular files whose path matches an
//! optional regular expression.

mod filter;
mod walker;

pub use filter::{PathPattern, filter_by_pattern, is_readable, is_regular_file};
pub use walker::{Traversal, TraversalOptions, enumerate, is_hidden_name};

use crate::Result;
use std::path::{Path, PathBuf};

/// Enumerate `root` and keep the printable entries
///
/// Zero results is not an error here; whether that is fatal depends on
/// the caller (a dry run only reports it).
pub fn discover(
    root: &Path,
    options: TraversalOptions,
    pattern: Option<&PathPattern>,
) -> Result<Vec<PathBuf>> {
    let entries = enumerate(root, options)?;
    let printable = filter_by_pattern(entries, pattern);
    log::debug!(
        "Discovered {} printable file(s) under {}",
        printable.len(),
        root.display()
    );
    Ok(printable)
}
