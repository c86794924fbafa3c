use log::trace;

use crate::arena::Arena;
use crate::data_types::Removed;
use crate::error::InvariantError;
use crate::types::Key;
use crate::util::{assert_order, get_l, get_r, replace_child, set_l, set_r};

use super::types::AvlNodeLike;

/// What caused the structural change a retrace is repairing.
///
/// Picks the rotation for a doubly-unbalanced node: after an insert the
/// inserted key says which grandchild grew, after a removal the child's own
/// balance does.
#[derive(Clone, Copy, Debug)]
enum Cause {
    Inserted(Key),
    Removed,
}

#[inline]
fn height<N: AvlNodeLike>(arena: &Arena<N>, i: Option<u32>) -> i32 {
    i.map_or(0, |i| arena[i].height())
}

#[inline]
fn update_height<N: AvlNodeLike>(arena: &mut Arena<N>, i: u32) {
    let h = 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i)));
    arena[i].set_height(h);
}

/// `height(l) - height(r)` from the cached child heights.
#[inline]
pub fn balance<N: AvlNodeLike>(arena: &Arena<N>, i: u32) -> i32 {
    height(arena, get_l(arena, i)) - height(arena, get_r(arena, i))
}

/// Rotates `y` right and returns the new subtree root (`y`'s left child).
fn rotate_right<N: AvlNodeLike>(arena: &mut Arena<N>, y: u32) -> u32 {
    let x = get_l(arena, y).expect("right rotation needs a left child");
    let t2 = get_r(arena, x);
    set_r(arena, x, Some(y));
    set_l(arena, y, t2);
    update_height(arena, y);
    update_height(arena, x);
    trace!("avl rotate right at {}", arena[y].key());
    x
}

/// Rotates `x` left and returns the new subtree root (`x`'s right child).
fn rotate_left<N: AvlNodeLike>(arena: &mut Arena<N>, x: u32) -> u32 {
    let y = get_r(arena, x).expect("left rotation needs a right child");
    let t2 = get_l(arena, y);
    set_l(arena, y, Some(x));
    set_r(arena, x, t2);
    update_height(arena, x);
    update_height(arena, y);
    trace!("avl rotate left at {}", arena[x].key());
    y
}

/// Refreshes the height of `n`, rotates if it is out of balance and returns
/// the root of the repaired subtree.
fn rebalance<N: AvlNodeLike>(arena: &mut Arena<N>, n: u32, cause: Cause) -> u32 {
    update_height(arena, n);
    let b = balance(arena, n);

    if b > 1 {
        let l = get_l(arena, n).expect("left-heavy node has a left child");
        // Equal keys descend right, so a duplicate of `l` sits in its right subtree.
        let single = match cause {
            Cause::Inserted(key) => key < arena[l].key(),
            Cause::Removed => balance(arena, l) >= 0,
        };
        if !single {
            let top = rotate_left(arena, l);
            set_l(arena, n, Some(top));
        }
        return rotate_right(arena, n);
    }

    if b < -1 {
        let r = get_r(arena, n).expect("right-heavy node has a right child");
        let single = match cause {
            Cause::Inserted(key) => key >= arena[r].key(),
            Cause::Removed => balance(arena, r) <= 0,
        };
        if !single {
            let top = rotate_right(arena, r);
            set_r(arena, n, Some(top));
        }
        return rotate_left(arena, n);
    }

    n
}

/// Walks `path` (root first) bottom-up, rebalancing every node on it and
/// re-linking each repaired subtree into its parent. Returns the new root.
///
/// Never stops early: a removal may need a rotation at every ancestor.
fn retrace<N: AvlNodeLike>(arena: &mut Arena<N>, path: &[u32], cause: Cause) -> Option<u32> {
    let mut below: Option<(u32, u32)> = None;
    for &n in path.iter().rev() {
        if let Some((old, new)) = below {
            if old != new {
                if get_l(arena, n) == Some(old) {
                    set_l(arena, n, Some(new));
                } else {
                    set_r(arena, n, Some(new));
                }
            }
        }
        below = Some((n, rebalance(arena, n, cause)));
    }
    below.map(|(_, top)| top)
}

/// Links `n` as a leaf and rebalances the path back to the root.
pub fn insert<N: AvlNodeLike>(arena: &mut Arena<N>, root: Option<u32>, n: u32) -> Option<u32> {
    let Some(mut curr) = root else {
        return Some(n);
    };

    let key = arena[n].key();
    let mut path = Vec::new();
    loop {
        path.push(curr);
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
                break;
            }
        }
    }

    retrace(arena, &path, Cause::Inserted(key))
}

/// Removes one node holding `key` and rebalances every ancestor of the
/// physically unlinked node.
pub fn remove<N: AvlNodeLike>(arena: &mut Arena<N>, root: Option<u32>, key: Key) -> Option<Removed> {
    let mut path = Vec::new();
    let mut target = root?;
    loop {
        let k = arena[target].key();
        if key == k {
            break;
        }
        path.push(target);
        target = if key < k {
            get_l(arena, target)?
        } else {
            get_r(arena, target)?
        };
    }

    if let (Some(_), Some(r)) = (get_l(arena, target), get_r(arena, target)) {
        path.push(target);
        let mut successor = r;
        while let Some(sl) = get_l(arena, successor) {
            path.push(successor);
            successor = sl;
        }
        let successor_key = arena[successor].key();
        trace!("avl remove {key}: splicing successor {successor_key}");
        arena[target].set_key(successor_key);
        target = successor;
    }

    let child = get_l(arena, target).or(get_r(arena, target));
    let mut new_root = root;
    replace_child(arena, &mut new_root, path.last().copied(), target, child);

    let root = if path.is_empty() {
        new_root
    } else {
        retrace(arena, &path, Cause::Removed)
    };
    Some(Removed {
        root,
        released: target,
    })
}

/// Checks cached heights, the AVL balance bound and key order.
pub fn assert_avl_tree<N: AvlNodeLike>(
    arena: &Arena<N>,
    root: Option<u32>,
    strict: bool,
) -> Result<(), InvariantError> {
    fn validate<N: AvlNodeLike>(arena: &Arena<N>, node: Option<u32>) -> Result<i32, InvariantError> {
        let Some(i) = node else {
            return Ok(0);
        };
        let lh = validate(arena, get_l(arena, i))?;
        let rh = validate(arena, get_r(arena, i))?;
        let n = &arena[i];
        let actual = 1 + lh.max(rh);
        if n.height() != actual {
            return Err(InvariantError::HeightMismatch {
                key: n.key(),
                cached: n.height(),
                actual,
            });
        }
        let balance = lh - rh;
        if !(-1..=1).contains(&balance) {
            return Err(InvariantError::Unbalanced {
                key: n.key(),
                balance,
            });
        }
        Ok(actual)
    }

    validate(arena, root)?;
    assert_order(arena, root, strict)
}

/// Debug printer for AVL trees.
pub fn print<N: AvlNodeLike>(arena: &Arena<N>, node: Option<u32>, tab: &str) -> String {
    crate::util::print(arena, node, tab, &|n: &N| format!("[h={}]", n.height()))
}
