//! Unbalanced baseline tree.

#[path = "BstTree.rs"]
pub mod bst_tree;
pub mod types;
pub mod util;

pub use bst_tree::{BstOps, BstTree};
pub use types::BstNode;
pub use util::{assert_bst, insert, print, remove};
