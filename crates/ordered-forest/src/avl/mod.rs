//! Height-balanced (AVL) tree.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod index;
pub mod types;
pub mod util;

pub use avl_tree::{AvlOps, AvlTree};
pub use index::*;
