//! Directory walker module for file discovery
//!
//! Provides streaming enumeration of a directory tree using walkdir, with
//! hidden entries pruned before they are descended into.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::{Error, Result};

/// Options for directory traversal
#[derive(Debug, Clone, Copy, Default)]
pub struct TraversalOptions {
    /// Yield hidden entries and descend into hidden directories
    pub include_hidden: bool,
    /// Follow symbolic links
    pub follow_links: bool,
    /// Order siblings by file name instead of directory-listing order
    ///
    /// Files still come before directories either way.
    pub sort_by_name: bool,
}

impl TraversalOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether hidden entries are included
    pub fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set whether siblings are sorted by file name
    pub fn with_sort_by_name(mut self, sort: bool) -> Self {
        self.sort_by_name = sort;
        self
    }
}

/// Streaming iterator over every directory and file below a root
///
/// The root itself is never yielded. Parents are yielded before their
/// children, and within a directory files are yielded before
/// subdirectories.
pub struct Traversal {
    walker: Box<dyn Iterator<Item = walkdir::Result<DirEntry>>>,
}

impl Traversal {
    /// Create a new traversal rooted at `root`
    pub fn new(root: &Path, options: TraversalOptions) -> Result<Self> {
        if !root.exists() {
            return Err(Error::ResourceNotFound {
                path: root.to_path_buf(),
            });
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(options.follow_links);

        // A directory's own files come before anything in its subdirectories.
        // The sort is stable, so listing order survives within each group.
        let walker = if options.sort_by_name {
            walker.sort_by(|a, b| {
                files_first(a, b).then_with(|| a.file_name().cmp(b.file_name()))
            })
        } else {
            walker.sort_by(files_first)
        };

        let walker: Box<dyn Iterator<Item = walkdir::Result<DirEntry>>> = if options.include_hidden
        {
            Box::new(walker.into_iter())
        } else {
            // The root is never judged by its own name
            Box::new(
                walker
                    .into_iter()
                    .filter_entry(|entry| entry.depth() == 0 || !is_hidden_name(entry.file_name())),
            )
        };

        Ok(Self { walker })
    }
}

impl Iterator for Traversal {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.walker.next()? {
                Ok(entry) => return Some(entry.into_path()),
                Err(e) => {
                    // Unreadable entries are skipped, not fatal
                    log::warn!("Walk error: {e}");
                    continue;
                }
            }
        }
    }
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type().is_dir().cmp(&b.file_type().is_dir())
}

/// Check whether a single path segment names a hidden entry
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Collect every directory and file below `root`
pub fn enumerate(root: &Path, options: TraversalOptions) -> Result<Vec<PathBuf>> {
    Ok(Traversal::new(root, options)?.collect())
}
