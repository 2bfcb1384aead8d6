use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::codec;
use super::error::StorageError;
use crate::tree::Tree;

/// The single file a tree lives in between runs.
pub struct TreeFile {
    path: PathBuf,
}

impl TreeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole tree. A missing file is an empty tree.
    pub fn load(&self) -> Result<Tree, StorageError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("{} does not exist, starting with an empty tree", self.path.display());
                return Ok(Tree::new());
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .map_err(|e| StorageError::io(&self.path, e))?;
        let tree = codec::decode(&buffer)?;
        debug!("loaded {} nodes ({} bytes) from {}", tree.len(), buffer.len(), self.path.display());
        Ok(tree)
    }

    /// Replaces the file contents with the encoded tree.
    pub fn save(&self, tree: &Tree) -> Result<(), StorageError> {
        let encoded = codec::encode(tree)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| StorageError::io(&self.path, e))?;
        file.write_all(&encoded)
            .map_err(|e| StorageError::io(&self.path, e))?;
        debug!("saved {} bytes to {}", encoded.len(), self.path.display());
        Ok(())
    }
}
