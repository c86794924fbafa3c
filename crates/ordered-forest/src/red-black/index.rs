pub use super::types::{Color, RbNode, RbNodeLike, NIL};
pub use super::util::{
    assert_red_black_tree, insert, print, remove, rotate_left, rotate_right, transplant,
};
