use crate::arena::Arena;
use crate::config::TreeConfig;
use crate::data_types::{ForestSet, Removed, TreeOps};
use crate::error::InvariantError;
use crate::types::{Key, OrderedSet};
use crate::util::Inorder;

use super::types::BstNode;
use super::util;

#[derive(Clone, Debug)]
pub struct BstOps;

impl TreeOps<BstNode> for BstOps {
    fn insert(arena: &mut Arena<BstNode>, root: Option<u32>, node: u32) -> Option<u32> {
        util::insert(arena, root, node)
    }

    fn remove(arena: &mut Arena<BstNode>, root: Option<u32>, key: Key) -> Option<Removed> {
        util::remove(arena, root, key)
    }
}

/// Unbalanced binary search tree.
///
/// Baseline for the balanced variants: same operations, no rebalancing, so
/// sorted input degrades it to a list. All walks are iterative.
#[derive(Clone, Debug)]
pub struct BstTree {
    inner: ForestSet<BstNode, BstOps>,
}

impl BstTree {
    pub fn new() -> Self {
        Self::with_config(TreeConfig::unique())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            inner: ForestSet::with(Arena::new(), config, BstNode::new),
        }
    }

    pub fn config(&self) -> &TreeConfig {
        self.inner.config()
    }

    pub fn insert(&mut self, key: Key) -> bool {
        self.inner.insert(key)
    }

    pub fn search(&self, key: Key) -> bool {
        self.inner.search(key)
    }

    pub fn delete(&mut self, key: Key) -> bool {
        self.inner.delete(key)
    }

    pub fn inorder(&self) -> Inorder<'_, BstNode> {
        self.inner.inorder()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn root_key(&self) -> Option<Key> {
        self.inner.root_key()
    }

    pub fn print(&self) -> String {
        util::print(self.inner.arena(), self.inner.root_index(), "")
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        util::assert_bst(
            self.inner.arena(),
            self.inner.root_index(),
            !self.config().allows_duplicates(),
        )?;
        self.inner.assert_len()
    }
}

impl Default for BstTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedSet for BstTree {
    type Iter<'a> = Inorder<'a, BstNode>;

    fn insert(&mut self, key: Key) -> bool {
        BstTree::insert(self, key)
    }

    fn search(&self, key: Key) -> bool {
        BstTree::search(self, key)
    }

    fn delete(&mut self, key: Key) -> bool {
        BstTree::delete(self, key)
    }

    fn inorder(&self) -> Inorder<'_, BstNode> {
        BstTree::inorder(self)
    }

    fn len(&self) -> usize {
        BstTree::len(self)
    }

    fn clear(&mut self) {
        BstTree::clear(self)
    }

    fn assert_valid(&self) -> Result<(), InvariantError> {
        BstTree::assert_valid(self)
    }
}

impl Extend<Key> for BstTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for BstTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
