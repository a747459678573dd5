//! File filtering module using regular expressions
//!
//! A pattern is searched for anywhere in the full path string, so `\.pdf$`
//! keeps PDFs and `invoices/` keeps everything below any `invoices`
//! directory.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Compiled search pattern applied to full path strings
#[derive(Debug, Clone)]
pub struct PathPattern {
    regex: Regex,
}

impl PathPattern {
    /// Compile a pattern, reporting the parser diagnostic on failure
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))?;
        Ok(Self { regex })
    }

    /// Check whether the pattern occurs anywhere in the path
    pub fn matches(&self, path: &Path) -> bool {
        self.regex.is_match(&path.to_string_lossy())
    }

    /// Get the original pattern text
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Check whether a path refers to a regular file, following symlinks
pub fn is_regular_file(path: &Path) -> bool {
    path.is_file()
}

/// Check whether the current user may open a file for reading
pub fn is_readable(path: &Path) -> bool {
    match fs::File::open(path) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Skipping unreadable file {}: {e}", path.display());
            false
        }
    }
}

/// Keep the readable regular files whose path matches `pattern`
///
/// Directories never survive this step, with or without a pattern. Order
/// is preserved.
pub fn filter_by_pattern<I>(paths: I, pattern: Option<&PathPattern>) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    paths
        .into_iter()
        .filter(|path| is_regular_file(path))
        .filter(|path| pattern.is_none_or(|pattern| pattern.matches(path)))
        .filter(|path| is_readable(path))
        .collect()
}
