/// One operation per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Insert { key: String, value: String },
    Query { key: String },
    Update { key: String, value: String },
    Delete { key: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Insert { .. } => "insert",
            Command::Query { .. } => "query",
            Command::Update { .. } => "update",
            Command::Delete { .. } => "delete",
        }
    }

    /// Whether running the command can change the tree.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Command::Insert { .. } | Command::Update { .. } | Command::Delete { .. })
    }
}
