use crate::types::{Key, Node};

/// AVL tree node.
#[derive(Clone, Debug)]
pub struct AvlNode {
    pub k: Key,
    pub l: Option<u32>,
    pub r: Option<u32>,
    /// Cached subtree height; a leaf has height 1, an absent child 0.
    pub h: i32,
}

impl AvlNode {
    pub fn new(k: Key) -> Self {
        Self {
            k,
            l: None,
            r: None,
            h: 1,
        }
    }
}

impl Node for AvlNode {
    fn key(&self) -> Key {
        self.k
    }

    fn set_key(&mut self, key: Key) {
        self.k = key;
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike: Node {
    fn height(&self) -> i32;
    fn set_height(&mut self, h: i32);
}

impl AvlNodeLike for AvlNode {
    fn height(&self) -> i32 {
        self.h
    }

    fn set_height(&mut self, h: i32) {
        self.h = h;
    }
}
