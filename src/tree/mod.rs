pub mod node;
pub mod bst;
pub mod iter;
pub mod policy;

pub use node::Node;
pub use bst::{Tree, Insertion};
pub use iter::{Iter, Keys};
pub use policy::DuplicatePolicy;
