//! Node and set trait definitions.
//!
//! Nodes live in an [`Arena`](crate::arena::Arena) and refer to each other by
//! `u32` slot index instead of by pointer. Parent to child is the only owning
//! direction; the red-black tree additionally keeps a parent index that is
//! only ever read while walking back up during fix-up.

use crate::error::InvariantError;

/// Key type stored by every tree in this crate.
pub type Key = i64;

/// Child links (`l`, `r`) and key of an arena node.
///
/// `None` means "no child". The red-black node stores its children as raw
/// indices with the sentinel standing in for an absent child, and maps the
/// sentinel to `None` here, so the shared helpers in [`crate::util`] never
/// see it.
pub trait Node {
    fn key(&self) -> Key;
    fn set_key(&mut self, key: Key);
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// The four-operation surface shared by [`BstTree`](crate::bst::BstTree),
/// [`AvlTree`](crate::avl::AvlTree) and [`RbTree`](crate::red_black::RbTree).
///
/// All operations are total. A rejected duplicate, a missing key on delete
/// and a failed search are reported through the return value.
pub trait OrderedSet {
    type Iter<'a>: Iterator<Item = Key>
    where
        Self: 'a;

    /// Inserts `key`. Returns `true` if a node was added.
    fn insert(&mut self, key: Key) -> bool;

    /// Returns `true` if some node holds `key`.
    fn search(&self, key: Key) -> bool;

    /// Removes one node holding `key`. Returns `true` if a node was removed.
    fn delete(&mut self, key: Key) -> bool;

    /// Lazy ascending enumeration of the stored keys.
    fn inorder(&self) -> Self::Iter<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Checks every structural invariant of the variant.
    fn assert_valid(&self) -> Result<(), InvariantError>;
}
