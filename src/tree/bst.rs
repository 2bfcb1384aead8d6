use std::cmp::Ordering;
use std::fmt;

use super::iter::{Iter, Keys};
use super::node::Node;
use super::policy::DuplicatePolicy;

/// Result of `Tree::insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    Overwritten,
    Rejected,
}

/// Unbalanced binary search tree keyed by strings.
///
/// Keys left of a node compare less than it, keys right of it compare
/// greater or equal. Every walk is a loop, so degenerate trees are as safe as
/// balanced ones.
#[derive(Default)]
pub struct Tree {
    root: Option<Box<Node>>,
    policy: DuplicatePolicy,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self { root: None, policy }
    }

    pub(crate) fn from_root(root: Option<Box<Node>>) -> Self {
        Self {
            root,
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: DuplicatePolicy) {
        self.policy = policy;
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn insert(&mut self, key: String, value: String) -> Insertion {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            if node.key == key {
                match self.policy {
                    DuplicatePolicy::Reject => return Insertion::Rejected,
                    DuplicatePolicy::Overwrite => {
                        node.value = value;
                        return Insertion::Overwritten;
                    }
                    DuplicatePolicy::ShadowFirstMatch => {}
                }
            }
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(key, value)));
        Insertion::Inserted
    }

    /// First node on the search path whose key equals `key`.
    pub fn search(&self, key: &str) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.as_str()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn search_mut(&mut self, key: &str) -> Option<&mut Node> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(node.key.as_str()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.search(key).map(Node::value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Overwrites the value of an existing key. Absent keys are left alone.
    pub fn update(&mut self, key: &str, value: String) -> bool {
        match self.search_mut(key) {
            Some(node) => {
                node.value = value;
                true
            }
            None => false,
        }
    }

    /// Removes the first node matching `key` and returns its value.
    ///
    /// A node with two children takes over the key and value of its in-order
    /// successor, which is then unlinked from the right subtree.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        let mut slot = &mut self.root;
        loop {
            let ordering = key.cmp(slot.as_deref()?.key.as_str());
            match ordering {
                Ordering::Equal => break,
                Ordering::Less => slot = &mut slot.as_mut()?.left,
                Ordering::Greater => slot = &mut slot.as_mut()?.right,
            }
        }

        let mut node = slot.take()?;
        match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                *slot = child;
                Some(std::mem::take(&mut node.value))
            }
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                let mut successor = take_min(&mut node.right)?;
                node.key = std::mem::take(&mut successor.key);
                let promoted = std::mem::take(&mut successor.value);
                let removed = std::mem::replace(&mut node.value, promoted);
                *slot = Some(node);
                Some(removed)
            }
        }
    }

    /// Node with the smallest key.
    pub fn min(&self) -> Option<&Node> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(current)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.iter())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.left.as_deref().map(|n| (n, level + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, level + 1)));
        }
        deepest
    }

    /// First node whose key breaks the ordering: every key in a left subtree
    /// must be `<` its ancestor, every key in a right subtree `>=`.
    pub fn misplaced(&self) -> Option<&Node> {
        let mut pending: Vec<(&Node, Option<&str>, Option<&str>)> =
            self.root.as_deref().map(|n| (n, None, None)).into_iter().collect();
        while let Some((node, lower, upper)) = pending.pop() {
            let key = node.key.as_str();
            if lower.is_some_and(|bound| key < bound) || upper.is_some_and(|bound| key >= bound) {
                return Some(node);
            }
            pending.extend(node.left.as_deref().map(|n| (n, lower, Some(key))));
            pending.extend(node.right.as_deref().map(|n| (n, Some(key), upper)));
        }
        None
    }

    /// Nodes in pre-order, each paired with which children it has. Two trees
    /// with equal shapes yield equal sequences.
    fn shape(&self) -> Vec<(&str, &str, bool, bool)> {
        let mut out = Vec::new();
        let mut pending: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            out.push((
                node.key.as_str(),
                node.value.as_str(),
                node.left.is_some(),
                node.right.is_some(),
            ));
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }
        out
    }
}

/// Detaches the leftmost node below `slot`, splicing its right child into
/// its place.
fn take_min(slot: &mut Option<Box<Node>>) -> Option<Box<Node>> {
    let mut slot = slot;
    while slot.as_ref()?.left.is_some() {
        slot = &mut slot.as_mut()?.left;
    }
    let mut min = slot.take()?;
    *slot = min.right.take();
    Some(min)
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }
}

impl Eq for Tree {}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut tree = Tree::new();
        for (key, value) in entries {
            tree.insert(key.into(), value.into());
        }
        tree
    }
}
