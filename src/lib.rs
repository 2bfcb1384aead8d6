pub mod cli;
pub mod config;
pub mod query;
pub mod storage;
pub mod tree;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn invoke(config: &Config, command: Command) -> String {
        let mut cli = CLI::open(config).unwrap();
        let mut out = Vec::new();
        cli.run(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tree_file_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tree.bin");
        let config = Config::default().with_path(&path);

        // Phase 1: build a tree over several invocations
        let entries = [
            ("m", "13"),
            ("f", "6"),
            ("t", "20"),
            ("c", "3"),
            ("h", "8"),
            ("p", "16"),
            ("w", "23"),
        ];
        for (key, value) in entries {
            invoke(&config, Command::Insert { key: key.into(), value: value.into() });
        }
        let saved = fs::read(&path).unwrap();

        // Phase 2: reload directly and check shape survived
        let tree = TreeFile::new(&path).load().unwrap();
        assert_eq!(tree.root().unwrap().key(), "m");
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.len(), 7);

        // Phase 3: a failed update must leave the bytes alone
        let out = invoke(&config, Command::Update { key: "zz".into(), value: "0".into() });
        assert_eq!(out, "Cannot find key: zz\n");
        assert_eq!(fs::read(&path).unwrap(), saved);

        // Phase 4: remove the root and keep going
        invoke(&config, Command::Delete { key: "m".into() });
        assert_eq!(invoke(&config, Command::List), "c\nf\nh\np\nt\nw\n");
        let tree = TreeFile::new(&path).load().unwrap();
        assert_eq!(tree.root().unwrap().key(), "p");

        invoke(&config, Command::Update { key: "h".into(), value: "eight".into() });
        assert_eq!(invoke(&config, Command::Query { key: "h".into() }), "eight\n");
    }
}

pub use cli::CLI;
pub use config::Config;
pub use query::{Command, QueryEngine, QueryError, QueryResult};
pub use storage::{StorageError, TreeFile};
pub use tree::{DuplicatePolicy, Insertion, Node, Tree};
