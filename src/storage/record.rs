use serde::{Serialize, Deserialize};

/// One node as it sits in the tree file. The child flags say how many
/// already-decoded subtrees the node adopts.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NodeRecord {
    pub key: String,
    pub value: String,
    pub has_left: bool,
    pub has_right: bool,
}

impl NodeRecord {
    pub fn new(key: String, value: String, has_left: bool, has_right: bool) -> Self {
        Self { key, value, has_left, has_right }
    }
}

/// Body of the tree file, following the magic bytes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Snapshot {
    pub version: u32,
    pub records: Vec<NodeRecord>,
}
