pub use super::types::{AvlNode, AvlNodeLike};
pub use super::util::{assert_avl_tree, balance, insert, print, remove};
