//! Index-addressed node storage.

use std::ops::{Index, IndexMut};

/// `Vec`-backed node arena addressed by `u32` slot index.
///
/// Slots released by a delete are kept on a free list and handed out again by
/// the next [`alloc`](Arena::alloc). The first `reserved` slots are never
/// released or cleared; the red-black tree keeps its sentinel there.
#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<N>,
    free: Vec<u32>,
    reserved: u32,
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            reserved: 0,
        }
    }

    /// Arena whose slot 0 permanently holds `sentinel`.
    pub fn with_sentinel(sentinel: N) -> Self {
        Self {
            slots: vec![sentinel],
            free: Vec::new(),
            reserved: 1,
        }
    }

    pub fn alloc(&mut self, node: N) -> u32 {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = node;
            return idx;
        }
        let idx = u32::try_from(self.slots.len()).expect("arena exceeds u32 index space");
        self.slots.push(node);
        idx
    }

    /// Returns slot `idx` to the free list. The node stays in place until the
    /// slot is reused.
    pub fn release(&mut self, idx: u32) {
        debug_assert!(idx >= self.reserved, "reserved slot {idx} released");
        debug_assert!(!self.free.contains(&idx), "slot {idx} released twice");
        self.free.push(idx);
    }

    /// Number of allocated, unreleased, non-reserved slots.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len() - self.reserved as usize
    }

    pub fn clear(&mut self) {
        self.slots.truncate(self.reserved as usize);
        self.free.clear();
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        self.slots.get(idx as usize)
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, idx: u32) -> &N {
        &self.slots[idx as usize]
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, idx: u32) -> &mut N {
        &mut self.slots[idx as usize]
    }
}
