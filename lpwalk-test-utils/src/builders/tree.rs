//! Temporary directory tree builder

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a directory tree inside a fresh temporary directory
///
/// Paths are relative to the tree root; parent directories are created as
/// needed.
///
/// ```rust
/// use lpwalk_test_utils::TestTree;
///
/// let tree = TestTree::new()
///     .file("a.txt")
///     .file(".hidden/x.txt")
///     .dir("empty")
///     .build();
///
/// assert!(tree.path().join(".hidden/x.txt").is_file());
/// ```
#[derive(Debug, Default)]
pub struct TestTree {
    files: Vec<(PathBuf, Vec<u8>)>,
    dirs: Vec<PathBuf>,
}

impl TestTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with placeholder content
    pub fn file(self, path: impl AsRef<Path>) -> Self {
        let content = path.as_ref().to_string_lossy().into_owned().into_bytes();
        self.file_with_content(path, content)
    }

    /// Add a file with specific content
    pub fn file_with_content(mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> Self {
        self.files.push((path.as_ref().to_path_buf(), content.into()));
        self
    }

    /// Add an empty directory
    pub fn dir(mut self, path: impl AsRef<Path>) -> Self {
        self.dirs.push(path.as_ref().to_path_buf());
        self
    }

    /// Create the tree on disk
    pub fn build(self) -> TempDir {
        let root = TempDir::new().unwrap();

        for dir in &self.dirs {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }

        for (path, content) in &self.files {
            let full = root.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }

        root
    }
}
