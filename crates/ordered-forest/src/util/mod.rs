//! Ordered-tree primitives shared by all three variants.
//!
//! Everything here works on any [`Node`] through its `l` / `r` links and key,
//! never recurses, and never rebalances. The variants build their insert and
//! delete on top of these and add their own fix-up walk.

pub mod print;

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::types::{Key, Node};

pub use print::print;

#[inline]
pub(crate) fn get_l<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].r()
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_r(v);
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// Finds the first node holding `key` on the descent from `root`.
pub fn find<N: Node>(arena: &Arena<N>, root: Option<u32>, key: Key) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let k = arena[i].key();
        if key == k {
            return Some(i);
        }
        curr = if key < k {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Number of nodes on the longest root-to-leaf path (`0` for an empty tree).
pub fn height<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = get_l(arena, i) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, i) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Puts `new` into the slot of `parent` that currently holds `old`, or makes
/// it the root when `old` had no parent.
pub fn replace_child<N: Node>(
    arena: &mut Arena<N>,
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        None => *root = new,
        Some(p) if get_l(arena, p) == Some(old) => set_l(arena, p, new),
        Some(p) => set_r(arena, p, new),
    }
}

/// In-order walk yielding arena indices.
///
/// Uses an explicit stack bounded by the tree height, so a degenerate
/// baseline tree does not recurse.
pub struct InorderIndices<'a, N> {
    arena: &'a Arena<N>,
    stack: Vec<u32>,
}

impl<'a, N: Node> InorderIndices<'a, N> {
    pub fn new(arena: &'a Arena<N>, root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
        };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.stack.push(i);
            curr = get_l(self.arena, i);
        }
    }
}

impl<N: Node> Iterator for InorderIndices<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let i = self.stack.pop()?;
        self.push_left(get_r(self.arena, i));
        Some(i)
    }
}

/// In-order walk yielding keys in ascending order.
pub struct Inorder<'a, N> {
    inner: InorderIndices<'a, N>,
}

impl<'a, N: Node> Inorder<'a, N> {
    pub fn new(arena: &'a Arena<N>, root: Option<u32>) -> Self {
        Self {
            inner: InorderIndices::new(arena, root),
        }
    }
}

impl<N: Node> Iterator for Inorder<'_, N> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let i = self.inner.next()?;
        Some(self.inner.arena[i].key())
    }
}

/// Checks that the in-order key sequence is ascending, strictly when `strict`.
pub fn assert_order<N: Node>(
    arena: &Arena<N>,
    root: Option<u32>,
    strict: bool,
) -> Result<(), InvariantError> {
    let mut prev: Option<Key> = None;
    for next in Inorder::new(arena, root) {
        if let Some(prev) = prev {
            if prev > next || (strict && prev == next) {
                return Err(InvariantError::OrderViolated { prev, next });
            }
        }
        prev = Some(next);
    }
    Ok(())
}
