use crate::arena::Arena;

use super::super::types::{Color, RbNodeLike};

/// Debug printer for red-black trees.
pub fn print<N: RbNodeLike>(arena: &Arena<N>, node: Option<u32>, tab: &str) -> String {
    crate::util::print(arena, node, tab, &|n: &N| {
        match n.color() {
            Color::Red => "red",
            Color::Black => "black",
        }
        .to_string()
    })
}
