use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, DEFAULT_FILE_NAME};
use crate::query::Command;
use crate::tree::DuplicatePolicy;

#[derive(Debug, Parser)]
#[command(name = "bstkv", version)]
#[command(
    about = "Key-value store kept as a binary search tree in a single file",
    long_about = None
)]
pub struct Args {
    /// Tree file to load and rewrite
    #[arg(short, long, env = "BSTKV_FILE", default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// What insert does with a key that already exists
    #[arg(long, env = "BSTKV_DUPLICATES", value_enum, default_value_t = DuplicatePolicy::Overwrite)]
    pub duplicates: DuplicatePolicy,

    #[command(subcommand)]
    pub operation: Operation,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Operation {
    /// Print all keys in ascending order
    List {
        #[arg(hide = true)]
        ignored: Vec<String>,
    },
    /// Insert a key
    Insert {
        key: String,
        /// Value to store (empty when omitted)
        value: Option<String>,
    },
    /// Print the value stored under a key
    Query { key: String },
    /// Replace the value of an existing key
    Update {
        key: String,
        /// New value (empty when omitted)
        value: Option<String>,
    },
    /// Remove an existing key
    Delete { key: String },
}

impl Args {
    pub fn config(&self) -> Config {
        Config::default()
            .with_path(&self.file)
            .with_duplicates(self.duplicates)
    }
}

impl From<Operation> for Command {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::List { .. } => Command::List,
            Operation::Insert { key, value } => Command::Insert {
                key,
                value: value.unwrap_or_default(),
            },
            Operation::Query { key } => Command::Query { key },
            Operation::Update { key, value } => Command::Update {
                key,
                value: value.unwrap_or_default(),
            },
            Operation::Delete { key } => Command::Delete { key },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_insert() {
        let args = Args::try_parse_from(["bstkv", "insert", "k", "v"]).unwrap();
        assert_eq!(
            Command::from(args.operation),
            Command::Insert { key: "k".into(), value: "v".into() }
        );
    }

    #[test]
    fn test_missing_value_defaults_to_empty() {
        let args = Args::try_parse_from(["bstkv", "update", "k"]).unwrap();
        assert_eq!(
            Command::from(args.operation),
            Command::Update { key: "k".into(), value: String::new() }
        );
    }

    #[test]
    fn test_list_ignores_trailing_arguments() {
        let args = Args::try_parse_from(["bstkv", "list", "whatever"]).unwrap();
        assert_eq!(Command::from(args.operation), Command::List);

        let args = Args::try_parse_from(["bstkv", "list"]).unwrap();
        assert_eq!(Command::from(args.operation), Command::List);
    }

    #[test]
    fn test_options() {
        let args = Args::try_parse_from([
            "bstkv", "--file", "store.bin", "--duplicates", "shadow-first-match", "query", "k",
        ])
        .unwrap();
        let config = args.config();
        assert_eq!(config.path, PathBuf::from("store.bin"));
        assert_eq!(config.duplicates, DuplicatePolicy::ShadowFirstMatch);
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let err = Args::try_parse_from(["bstkv", "frobnicate", "k"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let err = Args::try_parse_from(["bstkv", "query"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
