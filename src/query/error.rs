use thiserror::Error;

/// User-level failures of a single command. None of them touch the tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Cannot find key: {0}")]
    KeyNotFound(String),
    #[error("Key already exists: {0}")]
    DuplicateKey(String),
}
