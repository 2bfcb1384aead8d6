use log::{debug, warn};

use super::command::Command;
use super::error::QueryError;
use super::result::QueryResult;
use crate::tree::{DuplicatePolicy, Insertion, Tree};

/// Applies commands to one in-memory tree.
pub struct QueryEngine {
    tree: Tree,
}

impl QueryEngine {
    pub fn new(policy: DuplicatePolicy) -> Self {
        QueryEngine::with_tree(Tree::with_policy(policy))
    }

    pub fn with_tree(tree: Tree) -> Self {
        QueryEngine { tree }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn into_tree(self) -> Tree {
        self.tree
    }

    pub fn execute(&mut self, command: Command) -> Result<QueryResult, QueryError> {
        debug!("executing {}", command.name());
        match command {
            Command::List => Ok(QueryResult::Keys(
                self.tree.keys().map(str::to_string).collect(),
            )),
            Command::Insert { key, value } => self.execute_insert(key, value),
            Command::Query { key } => match self.tree.get(&key) {
                Some(value) => Ok(QueryResult::Value(value.to_string())),
                None => Err(QueryError::KeyNotFound(key)),
            },
            Command::Update { key, value } => {
                if self.tree.update(&key, value) {
                    Ok(QueryResult::Updated)
                } else {
                    Err(QueryError::KeyNotFound(key))
                }
            }
            Command::Delete { key } => match self.tree.delete(&key) {
                Some(removed) => Ok(QueryResult::Deleted(removed)),
                None => Err(QueryError::KeyNotFound(key)),
            },
        }
    }

    fn execute_insert(&mut self, key: String, value: String) -> Result<QueryResult, QueryError> {
        match self.tree.insert(key.clone(), value) {
            Insertion::Inserted => Ok(QueryResult::Inserted),
            Insertion::Overwritten => Ok(QueryResult::Overwritten),
            Insertion::Rejected => {
                warn!("rejected duplicate key {:?}", key);
                Err(QueryError::DuplicateKey(key))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(key: &str, value: &str) -> Command {
        Command::Insert { key: key.to_string(), value: value.to_string() }
    }

    fn query(key: &str) -> Command {
        Command::Query { key: key.to_string() }
    }

    #[test]
    fn test_example_session() {
        let mut engine = QueryEngine::new(DuplicatePolicy::default());

        assert_eq!(engine.execute(insert("b", "2")), Ok(QueryResult::Inserted));
        assert_eq!(engine.execute(insert("a", "1")), Ok(QueryResult::Inserted));
        assert_eq!(engine.execute(insert("c", "3")), Ok(QueryResult::Inserted));

        assert_eq!(
            engine.execute(Command::List),
            Ok(QueryResult::Keys(vec!["a".into(), "b".into(), "c".into()]))
        );
        assert_eq!(engine.execute(query("a")), Ok(QueryResult::Value("1".into())));

        assert_eq!(
            engine.execute(Command::Delete { key: "b".into() }),
            Ok(QueryResult::Deleted("2".into()))
        );
        assert_eq!(
            engine.execute(Command::List),
            Ok(QueryResult::Keys(vec!["a".into(), "c".into()]))
        );
        assert_eq!(
            engine.execute(query("missing")),
            Err(QueryError::KeyNotFound("missing".into()))
        );
    }

    #[test]
    fn test_update_and_delete_require_existing_key() {
        let mut engine = QueryEngine::new(DuplicatePolicy::default());
        engine.execute(insert("k", "v")).unwrap();

        let err = engine
            .execute(Command::Update { key: "nope".into(), value: "x".into() })
            .unwrap_err();
        assert_eq!(err.to_string(), "Cannot find key: nope");

        let err = engine.execute(Command::Delete { key: "nope".into() }).unwrap_err();
        assert_eq!(err, QueryError::KeyNotFound("nope".into()));

        assert_eq!(
            engine.execute(Command::Update { key: "k".into(), value: "w".into() }),
            Ok(QueryResult::Updated)
        );
        assert_eq!(engine.tree().get("k"), Some("w"));
        assert_eq!(engine.tree().len(), 1);
    }

    #[test]
    fn test_insert_follows_duplicate_policy() {
        let mut overwrite = QueryEngine::new(DuplicatePolicy::Overwrite);
        overwrite.execute(insert("k", "1")).unwrap();
        assert_eq!(overwrite.execute(insert("k", "2")), Ok(QueryResult::Overwritten));
        assert_eq!(overwrite.execute(query("k")), Ok(QueryResult::Value("2".into())));

        let mut reject = QueryEngine::new(DuplicatePolicy::Reject);
        reject.execute(insert("k", "1")).unwrap();
        assert_eq!(
            reject.execute(insert("k", "2")),
            Err(QueryError::DuplicateKey("k".into()))
        );

        let mut shadow = QueryEngine::new(DuplicatePolicy::ShadowFirstMatch);
        shadow.execute(insert("k", "1")).unwrap();
        assert_eq!(shadow.execute(insert("k", "2")), Ok(QueryResult::Inserted));
        assert_eq!(shadow.execute(query("k")), Ok(QueryResult::Value("1".into())));
        assert_eq!(shadow.into_tree().len(), 2);
    }

    #[test]
    fn test_list_on_empty_tree() {
        let mut engine = QueryEngine::new(DuplicatePolicy::default());
        assert_eq!(engine.execute(Command::List), Ok(QueryResult::Keys(Vec::new())));
    }
}
