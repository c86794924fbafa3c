//! Arena-backed set core shared by the three tree variants.

use std::marker::PhantomData;

use log::debug;

use crate::arena::Arena;
use crate::config::{DuplicatePolicy, TreeConfig};
use crate::error::InvariantError;
use crate::types::{Key, Node};
use crate::util::{find, height, size, Inorder, InorderIndices};

/// Outcome of a successful [`TreeOps::remove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removed {
    /// Root after removal and rebalancing.
    pub root: Option<u32>,
    /// Slot of the node that was physically unlinked. With two children this
    /// is the in-order successor, not the node that held `key`.
    pub released: u32,
}

/// Structural operations a balancing strategy provides to [`ForestSet`].
pub trait TreeOps<N: Node> {
    /// Links the freshly allocated node `node` into the tree and restores the
    /// balance invariant. Returns the new root.
    fn insert(arena: &mut Arena<N>, root: Option<u32>, node: u32) -> Option<u32>;

    /// Removes one node holding `key`, or returns `None` if there is none.
    fn remove(arena: &mut Arena<N>, root: Option<u32>, key: Key) -> Option<Removed>;
}

/// Arena-backed ordered set core.
///
/// Owns the nodes, the root index, the element count and the configuration.
/// The balancing strategy `O` does the structural work.
#[derive(Clone, Debug)]
pub struct ForestSet<N, O> {
    arena: Arena<N>,
    root: Option<u32>,
    len: usize,
    config: TreeConfig,
    new_node: fn(Key) -> N,
    _ops: PhantomData<O>,
}

impl<N, O> ForestSet<N, O>
where
    N: Node,
    O: TreeOps<N>,
{
    pub fn with(arena: Arena<N>, config: TreeConfig, new_node: fn(Key) -> N) -> Self {
        Self {
            arena,
            root: None,
            len: 0,
            config,
            new_node,
            _ops: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &Arena<N> {
        &self.arena
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn node(&self, idx: u32) -> &N {
        &self.arena[idx]
    }

    pub fn insert(&mut self, key: Key) -> bool {
        if self.config.duplicates == DuplicatePolicy::Reject && self.search(key) {
            debug!("insert {key}: duplicate rejected");
            return false;
        }
        let node = self.arena.alloc((self.new_node)(key));
        self.root = O::insert(&mut self.arena, self.root, node);
        self.len += 1;
        true
    }

    pub fn search(&self, key: Key) -> bool {
        find(&self.arena, self.root, key).is_some()
    }

    pub fn find(&self, key: Key) -> Option<u32> {
        find(&self.arena, self.root, key)
    }

    pub fn delete(&mut self, key: Key) -> bool {
        let Some(Removed { root, released }) = O::remove(&mut self.arena, self.root, key) else {
            debug!("delete {key}: not present");
            return false;
        };
        self.root = root;
        self.arena.release(released);
        self.len -= 1;
        true
    }

    pub fn inorder(&self) -> Inorder<'_, N> {
        Inorder::new(&self.arena, self.root)
    }

    pub fn inorder_indices(&self) -> InorderIndices<'_, N> {
        InorderIndices::new(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn root_key(&self) -> Option<Key> {
        self.root.map(|r| self.arena[r].key())
    }

    /// Checks that the recorded length matches both the reachable node count
    /// and the number of live arena slots.
    pub fn assert_len(&self) -> Result<(), InvariantError> {
        let reachable = size(&self.arena, self.root);
        if reachable != self.len {
            return Err(InvariantError::LengthMismatch {
                recorded: self.len,
                reachable,
            });
        }
        if self.arena.live() != self.len {
            return Err(InvariantError::LengthMismatch {
                recorded: self.len,
                reachable: self.arena.live(),
            });
        }
        Ok(())
    }
}
