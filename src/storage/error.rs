use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode tree: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode tree: {0}")]
    Decode(#[source] bincode::Error),
    #[error("not a tree file (bad magic bytes)")]
    BadMagic,
    #[error("unsupported tree file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("corrupt tree data: {0}")]
    Corrupt(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io { path: path.into(), source }
    }
}
