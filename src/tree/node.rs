/// A single entry of the tree. Each node owns its subtrees outright.
pub struct Node {
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    pub fn new(key: String, value: String) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// The derived drop would recurse once per level; a sorted insert sequence
// makes that as deep as the tree is large.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_leaf() {
        let node = Node::new("a".to_string(), "1".to_string());
        assert_eq!(node.key(), "a");
        assert_eq!(node.value(), "1");
        assert!(node.is_leaf());
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn test_drop_long_chain() {
        let mut root = Node::new("0".to_string(), String::new());
        let mut slot = &mut root.right;
        for i in 1..200_000 {
            let node = slot.insert(Box::new(Node::new(i.to_string(), String::new())));
            slot = &mut node.right;
        }
        drop(root);
    }
}
