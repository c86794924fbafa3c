use log::trace;

use crate::arena::Arena;
use crate::data_types::Removed;
use crate::error::InvariantError;
use crate::types::{Key, Node};
use crate::util::{assert_order, get_l, get_r, replace_child, set_l, set_r};

/// Links `n` as a leaf. Equal keys descend to the right.
pub fn insert<N: Node>(arena: &mut Arena<N>, root: Option<u32>, n: u32) -> Option<u32> {
    let Some(mut curr) = root else {
        return Some(n);
    };

    let key = arena[n].key();
    loop {
        let go_left = key < arena[curr].key();
        let next = if go_left {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None => {
                if go_left {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                return root;
            }
        }
    }
}

/// Removes one node holding `key`.
///
/// A node with two children takes its in-order successor's key and the
/// successor is unlinked instead.
pub fn remove<N: Node>(arena: &mut Arena<N>, root: Option<u32>, key: Key) -> Option<Removed> {
    let mut parent: Option<u32> = None;
    let mut target = root?;
    loop {
        let k = arena[target].key();
        if key == k {
            break;
        }
        parent = Some(target);
        target = if key < k {
            get_l(arena, target)?
        } else {
            get_r(arena, target)?
        };
    }

    if let (Some(_), Some(r)) = (get_l(arena, target), get_r(arena, target)) {
        let mut successor_parent = target;
        let mut successor = r;
        while let Some(sl) = get_l(arena, successor) {
            successor_parent = successor;
            successor = sl;
        }
        let successor_key = arena[successor].key();
        trace!("bst remove {key}: splicing successor {successor_key}");
        arena[target].set_key(successor_key);
        parent = Some(successor_parent);
        target = successor;
    }

    let child = get_l(arena, target).or(get_r(arena, target));
    let mut root = root;
    replace_child(arena, &mut root, parent, target, child);
    Some(Removed {
        root,
        released: target,
    })
}

/// The baseline tree has no balance invariant, only key order.
pub fn assert_bst<N: Node>(
    arena: &Arena<N>,
    root: Option<u32>,
    strict: bool,
) -> Result<(), InvariantError> {
    assert_order(arena, root, strict)
}

/// Debug printer for baseline trees.
pub fn print<N: Node>(arena: &Arena<N>, node: Option<u32>, tab: &str) -> String {
    crate::util::print(arena, node, tab, &|_: &N| "bst".to_string())
}
