use crate::types::{Key, Node};

/// Node of the unbalanced baseline tree.
#[derive(Clone, Debug)]
pub struct BstNode {
    pub k: Key,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl BstNode {
    pub fn new(k: Key) -> Self {
        Self { k, l: None, r: None }
    }
}

impl Node for BstNode {
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
