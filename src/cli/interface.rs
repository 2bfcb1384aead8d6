use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info};

use super::display::write_result;
use crate::config::Config;
use crate::query::{Command, QueryEngine};
use crate::storage::TreeFile;

/// One invocation: load the tree file, run a single command, write it back.
pub struct CLI {
    pub query_engine: QueryEngine,
    store: TreeFile,
}

impl CLI {
    pub fn open(config: &Config) -> Result<Self> {
        let store = TreeFile::new(&config.path);
        let mut tree = store
            .load()
            .with_context(|| format!("failed to load tree from {}", config.path.display()))?;
        tree.set_policy(config.duplicates);
        info!("opened {} with {:?} duplicate policy", config.path.display(), config.duplicates);

        Ok(CLI {
            query_engine: QueryEngine::with_tree(tree),
            store,
        })
    }

    /// User errors (unknown key, rejected duplicate) are printed to `out` and
    /// the tree is saved regardless. Only storage failures are returned.
    pub fn run<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        let mutation = command.is_mutation();
        match self.query_engine.execute(command) {
            Ok(result) => write_result(out, &result)?,
            Err(error) => writeln!(out, "{}", error)?,
        }

        if !mutation {
            debug!("rewriting {} after a read-only command", self.store.path().display());
        }
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        self.store
            .save(self.query_engine.tree())
            .with_context(|| format!("failed to save tree to {}", self.store.path().display()))
    }
}
