use crate::arena::Arena;
use crate::config::TreeConfig;
use crate::data_types::{ForestSet, Removed, TreeOps};
use crate::error::InvariantError;
use crate::types::{Key, OrderedSet};
use crate::util::Inorder;

use super::types::AvlNode;
use super::util;

#[derive(Clone, Debug)]
pub struct AvlOps;

impl TreeOps<AvlNode> for AvlOps {
    fn insert(arena: &mut Arena<AvlNode>, root: Option<u32>, node: u32) -> Option<u32> {
        util::insert(arena, root, node)
    }

    fn remove(arena: &mut Arena<AvlNode>, root: Option<u32>, key: Key) -> Option<Removed> {
        util::remove(arena, root, key)
    }
}

/// AVL tree over integer keys.
///
/// After every insert and delete the path from the changed position back to
/// the root is retraced: heights are refreshed and any node whose children
/// differ in height by more than one is fixed with one or two rotations.
///
/// ```
/// use ordered_forest::avl::AvlTree;
///
/// let mut tree: AvlTree = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
/// tree.delete(30);
/// assert_eq!(tree.inorder().collect::<Vec<_>>(), [20, 40, 50, 60, 70, 80]);
/// assert!(tree.search(40));
/// tree.assert_valid().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct AvlTree {
    inner: ForestSet<AvlNode, AvlOps>,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::with_config(TreeConfig::unique())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            inner: ForestSet::with(Arena::new(), config, AvlNode::new),
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

    pub fn inorder(&self) -> Inorder<'_, AvlNode> {
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
        util::assert_avl_tree(
            self.inner.arena(),
            self.inner.root_index(),
            !self.config().allows_duplicates(),
        )?;
        self.inner.assert_len()
    }
}

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedSet for AvlTree {
    type Iter<'a> = Inorder<'a, AvlNode>;

    fn insert(&mut self, key: Key) -> bool {
        AvlTree::insert(self, key)
    }

    fn search(&self, key: Key) -> bool {
        AvlTree::search(self, key)
    }

    fn delete(&mut self, key: Key) -> bool {
        AvlTree::delete(self, key)
    }

    fn inorder(&self) -> Inorder<'_, AvlNode> {
        AvlTree::inorder(self)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn clear(&mut self) {
        AvlTree::clear(self)
    }

    fn assert_valid(&self) -> Result<(), InvariantError> {
        AvlTree::assert_valid(self)
    }
}

impl Extend<Key> for AvlTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for AvlTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
