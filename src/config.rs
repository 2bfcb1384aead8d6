use std::path::PathBuf;

use crate::tree::DuplicatePolicy;

/// File the tree is kept in when no other path is given.
pub const DEFAULT_FILE_NAME: &str = "tree.bin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub duplicates: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE_NAME),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl Config {
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}
