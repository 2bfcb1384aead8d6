use clap::ValueEnum;

/// What `Tree::insert` does when the key is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DuplicatePolicy {
    /// Leave the tree untouched.
    Reject,
    /// Replace the value of the first matching node on the search path.
    #[default]
    Overwrite,
    /// Insert another node into the right subtree. Search keeps finding the
    /// older node, so the new one is shadowed.
    ShadowFirstMatch,
}
