use log::trace;

use crate::arena::Arena;
use crate::data_types::Removed;
use crate::error::InvariantError;
use crate::types::Key;
use crate::util::{assert_order, find};

use super::types::{Color, RbNodeLike, NIL};

#[path = "util/print.rs"]
mod print_impl;

pub use print_impl::print;

/// Which child of its parent a node is. Every fix-up case exists in two
/// mirrored forms; they are written once against a `Side`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[inline]
fn parent<N: RbNodeLike>(arena: &Arena<N>, i: u32) -> u32 {
    arena[i].parent()
}

#[inline]
fn child<N: RbNodeLike>(arena: &Arena<N>, i: u32, side: Side) -> u32 {
    match side {
        Side::Left => arena[i].left(),
        Side::Right => arena[i].right(),
    }
}

#[inline]
fn set_child<N: RbNodeLike>(arena: &mut Arena<N>, i: u32, side: Side, v: u32) {
    debug_assert_ne!(i, NIL, "sentinel links are never written");
    match side {
        Side::Left => arena[i].set_left(v),
        Side::Right => arena[i].set_right(v),
    }
}

#[inline]
fn set_parent<N: RbNodeLike>(arena: &mut Arena<N>, i: u32, p: u32) {
    debug_assert_ne!(i, NIL, "sentinel links are never written");
    arena[i].set_parent(p);
}

#[inline]
fn is_red<N: RbNodeLike>(arena: &Arena<N>, i: u32) -> bool {
    arena[i].color() == Color::Red
}

#[inline]
fn set_color<N: RbNodeLike>(arena: &mut Arena<N>, i: u32, c: Color) {
    debug_assert_ne!(i, NIL, "sentinel color is never written");
    arena[i].set_color(c);
}

/// Replaces `old` with `new` in the child slot of `old`'s parent, or in the
/// root when `old` is the root.
#[inline]
fn relink_parent<N: RbNodeLike>(arena: &mut Arena<N>, root: &mut u32, old: u32, new: u32) {
    let p = parent(arena, old);
    if p == NIL {
        *root = new;
    } else if arena[p].left() == old {
        set_child(arena, p, Side::Left, new);
    } else {
        set_child(arena, p, Side::Right, new);
    }
}

/// Rotates `x` toward `side`: the child on the opposite side takes `x`'s
/// place and `x` becomes its `side` child.
fn rotate<N: RbNodeLike>(arena: &mut Arena<N>, root: &mut u32, x: u32, side: Side) {
    let y = child(arena, x, side.flip());
    debug_assert_ne!(y, NIL, "rotation needs a real child");
    let inner = child(arena, y, side);

    set_child(arena, x, side.flip(), inner);
    if inner != NIL {
        set_parent(arena, inner, x);
    }
    relink_parent(arena, root, x, y);
    let xp = parent(arena, x);
    set_parent(arena, y, xp);
    set_child(arena, y, side, x);
    set_parent(arena, x, y);
    trace!("rb rotate {side:?} at {}", arena[x].key());
}

pub fn rotate_left<N: RbNodeLike>(arena: &mut Arena<N>, root: &mut u32, x: u32) {
    rotate(arena, root, x, Side::Left);
}

pub fn rotate_right<N: RbNodeLike>(arena: &mut Arena<N>, root: &mut u32, x: u32) {
    rotate(arena, root, x, Side::Right);
}

/// Puts the subtree rooted at `v` in `u`'s place. `v` may be [`NIL`], in
/// which case only the parent's slot changes. Children are untouched.
pub fn transplant<N: RbNodeLike>(arena: &mut Arena<N>, root: &mut u32, u: u32, v: u32) {
    relink_parent(arena, root, u, v);
    if v != NIL {
        let up = parent(arena, u);
        set_parent(arena, v, up);
    }
}

/// Links the red node `z` as a leaf and restores the red-black invariants.
/// Equal keys descend to the right.
pub fn insert<N: RbNodeLike>(arena: &mut Arena<N>, root: Option<u32>, z: u32) -> Option<u32> {
    let mut root = root.unwrap_or(NIL);
    let key = arena[z].key();

    let mut y = NIL;
    let mut x = root;
    while x != NIL {
        y = x;
        x = if key < arena[x].key() {
            arena[x].left()
        } else {
            arena[x].right()
        };
    }

    set_parent(arena, z, y);
    if y == NIL {
        root = z;
    } else if key < arena[y].key() {
        set_child(arena, y, Side::Left, z);
    } else {
        set_child(arena, y, Side::Right, z);
    }

    insert_fix_up(arena, &mut root, z);
    Some(root)
}

fn insert_fix_up<N: RbNodeLike>(arena: &mut Arena<N>, root: &mut u32, mut z: u32) {
    // The sentinel parent of the root is black, which ends the walk there.
    while is_red(arena, parent(arena, z)) {
        let p = parent(arena, z);
        // A red parent is never the root, so the grandparent is real.
        let g = parent(arena, p);
        let side = if arena[g].left() == p {
            Side::Left
        } else {
            Side::Right
        };
        let uncle = child(arena, g, side.flip());

        if is_red(arena, uncle) {
            trace!("rb insert fix-up at {}: red uncle", arena[g].key());
            set_color(arena, p, Color::Black);
            set_color(arena, uncle, Color::Black);
            set_color(arena, g, Color::Red);
            z = g;
            continue;
        }

        if z == child(arena, p, side.flip()) {
            trace!("rb insert fix-up at {}: inner child", arena[z].key());
            z = p;
            rotate(arena, root, z, side);
        }
        let p = parent(arena, z);
        let g = parent(arena, p);
        trace!("rb insert fix-up at {}: outer child", arena[z].key());
        set_color(arena, p, Color::Black);
        set_color(arena, g, Color::Red);
        rotate(arena, root, g, side.flip());
    }

    let r = *root;
    set_color(arena, r, Color::Black);
}

/// Removes one node holding `key` and restores the red-black invariants.
///
/// A node with two children takes its in-order successor's key and the
/// successor is unlinked instead.
pub fn remove<N: RbNodeLike>(arena: &mut Arena<N>, root: Option<u32>, key: Key) -> Option<Removed> {
    let z = find(arena, root, key)?;
    let mut root = root.unwrap_or(NIL);

    let removed = if arena[z].left() != NIL && arena[z].right() != NIL {
        let mut s = arena[z].right();
        while arena[s].left() != NIL {
            s = arena[s].left();
        }
        let successor_key = arena[s].key();
        trace!("rb remove {key}: splicing successor {successor_key}");
        arena[z].set_key(successor_key);
        s
    } else {
        z
    };

    let x = if arena[removed].left() != NIL {
        arena[removed].left()
    } else {
        arena[removed].right()
    };
    let x_parent = parent(arena, removed);
    let removed_color = arena[removed].color();
    transplant(arena, &mut root, removed, x);

    if removed_color == Color::Black {
        delete_fix_up(arena, &mut root, x, x_parent);
    }

    Some(Removed {
        root: (root != NIL).then_some(root),
        released: removed,
    })
}

/// Repairs the extra black carried by `x` after a black node was unlinked.
///
/// `x` may be the sentinel, whose parent link is never written, so its
/// parent travels alongside it as `xp`.
fn delete_fix_up<N: RbNodeLike>(arena: &mut Arena<N>, root: &mut u32, mut x: u32, mut xp: u32) {
    while x != *root && !is_red(arena, x) {
        // When `x` is the sentinel its sibling is real, so a sentinel left
        // slot can only be `x` itself.
        let side = if arena[xp].left() == x {
            Side::Left
        } else {
            Side::Right
        };
        let mut w = child(arena, xp, side.flip());

        if is_red(arena, w) {
            trace!("rb delete fix-up at {}: red sibling", arena[xp].key());
            set_color(arena, w, Color::Black);
            set_color(arena, xp, Color::Red);
            rotate(arena, root, xp, side);
            w = child(arena, xp, side.flip());
        }

        let near = child(arena, w, side);
        let far = child(arena, w, side.flip());
        if !is_red(arena, near) && !is_red(arena, far) {
            trace!("rb delete fix-up at {}: black nephews", arena[xp].key());
            set_color(arena, w, Color::Red);
            x = xp;
            xp = parent(arena, x);
            continue;
        }

        if !is_red(arena, far) {
            trace!("rb delete fix-up at {}: red near nephew", arena[xp].key());
            set_color(arena, near, Color::Black);
            set_color(arena, w, Color::Red);
            rotate(arena, root, w, side.flip());
            w = child(arena, xp, side.flip());
        }

        trace!("rb delete fix-up at {}: red far nephew", arena[xp].key());
        let parent_color = arena[xp].color();
        set_color(arena, w, parent_color);
        set_color(arena, xp, Color::Black);
        let far = child(arena, w, side.flip());
        set_color(arena, far, Color::Black);
        rotate(arena, root, xp, side);
        x = *root;
        xp = NIL;
    }

    if x != NIL {
        set_color(arena, x, Color::Black);
    }
}

/// Checks the sentinel and root colors, parent links, the red-red rule,
/// equal black heights and key order.
pub fn assert_red_black_tree<N: RbNodeLike>(
    arena: &Arena<N>,
    root: Option<u32>,
    strict: bool,
) -> Result<(), InvariantError> {
    if is_red(arena, NIL) {
        return Err(InvariantError::SentinelNotBlack);
    }
    let Some(root) = root else {
        return Ok(());
    };
    if parent(arena, root) != NIL {
        return Err(InvariantError::RootHasParent);
    }
    if is_red(arena, root) {
        return Err(InvariantError::RootNotBlack);
    }

    fn black_height<N: RbNodeLike>(arena: &Arena<N>, node: u32) -> Result<usize, InvariantError> {
        if node == NIL {
            return Ok(0);
        }
        let l = arena[node].left();
        let r = arena[node].right();
        for c in [l, r] {
            if c != NIL && parent(arena, c) != node {
                return Err(InvariantError::BrokenParentLink { parent: node });
            }
        }
        if is_red(arena, node) && (is_red(arena, l) || is_red(arena, r)) {
            return Err(InvariantError::RedRedViolation {
                key: arena[node].key(),
            });
        }
        let lh = black_height(arena, l)?;
        let rh = black_height(arena, r)?;
        if lh != rh {
            return Err(InvariantError::BlackHeightMismatch {
                key: arena[node].key(),
                left: lh,
                right: rh,
            });
        }
        Ok(lh + usize::from(!is_red(arena, node)))
    }

    black_height(arena, root)?;
    assert_order(arena, Some(root), strict)
}
