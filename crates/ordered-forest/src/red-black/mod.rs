//! Color-balanced (red-black) tree.

pub mod index;
#[path = "RbTree.rs"]
pub mod rb_tree;
pub mod types;
pub mod util;

pub use index::*;
pub use rb_tree::{RbOps, RbTree};
