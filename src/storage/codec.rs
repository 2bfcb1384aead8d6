use bincode::Options;

use super::error::StorageError;
use super::record::{NodeRecord, Snapshot};
use crate::tree::{Node, Tree};

pub const MAGIC: &[u8; 4] = b"BSTK";
pub const FORMAT_VERSION: u32 = 1;

/// Serializes the whole tree: magic bytes, then a bincode snapshot holding
/// every node in post-order.
pub fn encode(tree: &Tree) -> Result<Vec<u8>, StorageError> {
    let snapshot = Snapshot {
        version: FORMAT_VERSION,
        records: to_records(tree),
    };
    let body = bincode::serialize(&snapshot).map_err(StorageError::Encode)?;

    let mut bytes = Vec::with_capacity(MAGIC.len() + body.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

pub fn decode(bytes: &[u8]) -> Result<Tree, StorageError> {
    let body = bytes.strip_prefix(MAGIC.as_slice()).ok_or(StorageError::BadMagic)?;
    // Same layout as `bincode::serialize`, but junk after the snapshot is an error.
    let snapshot: Snapshot = bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
        .deserialize(body)
        .map_err(StorageError::Decode)?;
    if snapshot.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: snapshot.version,
            expected: FORMAT_VERSION,
        });
    }
    from_records(snapshot.records)
}

/// Post-order listing of the tree. Walking node, right, left and reversing
/// gives left, right, node.
pub fn to_records(tree: &Tree) -> Vec<NodeRecord> {
    let mut records = Vec::new();
    let mut pending: Vec<&Node> = tree.root().into_iter().collect();
    while let Some(node) = pending.pop() {
        records.push(NodeRecord::new(
            node.key().to_string(),
            node.value().to_string(),
            node.left().is_some(),
            node.right().is_some(),
        ));
        pending.extend(node.left());
        pending.extend(node.right());
    }
    records.reverse();
    records
}

pub fn from_records(records: Vec<NodeRecord>) -> Result<Tree, StorageError> {
    let mut built: Vec<Box<Node>> = Vec::new();
    for (position, record) in records.into_iter().enumerate() {
        let right = if record.has_right {
            Some(built.pop().ok_or_else(|| missing_child(position, "right"))?)
        } else {
            None
        };
        let left = if record.has_left {
            Some(built.pop().ok_or_else(|| missing_child(position, "left"))?)
        } else {
            None
        };

        let mut node = Box::new(Node::new(record.key, record.value));
        node.left = left;
        node.right = right;
        built.push(node);
    }

    let root = built.pop();
    if !built.is_empty() {
        return Err(StorageError::Corrupt(format!(
            "{} subtrees left without a parent",
            built.len() + 1
        )));
    }
    let tree = Tree::from_root(root);
    if let Some(node) = tree.misplaced() {
        return Err(StorageError::Corrupt(format!(
            "key {:?} is out of order",
            node.key()
        )));
    }
    Ok(tree)
}

fn missing_child(position: usize, side: &str) -> StorageError {
    StorageError::Corrupt(format!(
        "record {} expects a {} child that was never written",
        position, side
    ))
}
