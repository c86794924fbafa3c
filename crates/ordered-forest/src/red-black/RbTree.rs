use crate::arena::Arena;
use crate::config::TreeConfig;
use crate::data_types::{ForestSet, Removed, TreeOps};
use crate::error::InvariantError;
use crate::types::{Key, Node, OrderedSet};
use crate::util::Inorder;

use super::types::{Color, RbNode, RbNodeLike};
use super::util;

#[derive(Clone, Debug)]
pub struct RbOps;

impl TreeOps<RbNode> for RbOps {
    fn insert(arena: &mut Arena<RbNode>, root: Option<u32>, node: u32) -> Option<u32> {
        util::insert(arena, root, node)
    }

    fn remove(arena: &mut Arena<RbNode>, root: Option<u32>, key: Key) -> Option<Removed> {
        util::remove(arena, root, key)
    }
}

/// Red-black tree over integer keys.
///
/// Arena slot 0 holds the shared black sentinel that stands in for every
/// absent child. By default equal keys are kept (see
/// [`TreeConfig::multiset`]); pass [`TreeConfig::unique`] to reject them.
///
/// ```
/// use ordered_forest::red_black::{Color, RbTree};
///
/// let mut tree: RbTree = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
/// assert_eq!(tree.root_color(), Some(Color::Black));
/// tree.delete(30);
/// tree.delete(50);
/// assert_eq!(tree.inorder().collect::<Vec<_>>(), [20, 40, 60, 70, 80]);
/// tree.assert_valid().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct RbTree {
    inner: ForestSet<RbNode, RbOps>,
}

impl RbTree {
    pub fn new() -> Self {
        Self::with_config(TreeConfig::multiset())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            inner: ForestSet::with(Arena::with_sentinel(RbNode::sentinel()), config, RbNode::new),
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

    pub fn inorder(&self) -> Inorder<'_, RbNode> {
        self.inner.inorder()
    }

    /// In-order `(key, color)` pairs.
    pub fn colored(&self) -> impl Iterator<Item = (Key, Color)> + '_ {
        self.inner.inorder_indices().map(|i| {
            let n = self.inner.node(i);
            (n.key(), n.color())
        })
    }

    /// Color of the node holding `key`, if any.
    pub fn color_of(&self, key: Key) -> Option<Color> {
        self.inner.find(key).map(|i| self.inner.node(i).color())
    }

    pub fn root_color(&self) -> Option<Color> {
        self.inner.root_index().map(|r| self.inner.node(r).color())
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
        util::assert_red_black_tree(
            self.inner.arena(),
            self.inner.root_index(),
            !self.config().allows_duplicates(),
        )?;
        self.inner.assert_len()
    }
}

impl Default for RbTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedSet for RbTree {
    type Iter<'a> = Inorder<'a, RbNode>;

    fn insert(&mut self, key: Key) -> bool {
        RbTree::insert(self, key)
    }

    fn search(&self, key: Key) -> bool {
        RbTree::search(self, key)
    }

    fn delete(&mut self, key: Key) -> bool {
        RbTree::delete(self, key)
    }

    fn inorder(&self) -> Inorder<'_, RbNode> {
        RbTree::inorder(self)
    }

    fn len(&self) -> usize {
        RbTree::len(self)
    }

    fn clear(&mut self) {
        RbTree::clear(self)
    }

    fn assert_valid(&self) -> Result<(), InvariantError> {
        RbTree::assert_valid(self)
    }
}

impl Extend<Key> for RbTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for RbTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
