#[derive(Debug, PartialEq, Eq)]
pub enum QueryResult {
    Keys(Vec<String>),
    Value(String),
    Inserted,
    Overwritten,
    Updated,
    Deleted(String),
}
