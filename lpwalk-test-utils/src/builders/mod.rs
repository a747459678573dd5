//! Builders for on-disk test fixtures

mod tree;

pub use tree::TestTree;
