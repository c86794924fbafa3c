use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Key, Node};

/// Arena index of the shared sentinel leaf.
///
/// Stands in for every absent child and for the root's parent. The sentinel
/// is BLACK and is never written to.
pub const NIL: u32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "R",
            Color::Black => "B",
        })
    }
}

/// Red-black tree node.
#[derive(Clone, Debug)]
pub struct RbNode {
    pub k: Key,
    pub p: u32,
    pub l: u32,
    pub r: u32,
    pub c: Color,
}

impl RbNode {
    /// New nodes are red with sentinel links.
    pub fn new(k: Key) -> Self {
        Self {
            k,
            p: NIL,
            l: NIL,
            r: NIL,
            c: Color::Red,
        }
    }

    pub fn sentinel() -> Self {
        Self {
            k: 0,
            p: NIL,
            l: NIL,
            r: NIL,
            c: Color::Black,
        }
    }
}

#[inline]
fn link(v: u32) -> Option<u32> {
    (v != NIL).then_some(v)
}

impl Node for RbNode {
    fn key(&self) -> Key {
        self.k
    }

    fn set_key(&mut self, key: Key) {
        self.k = key;
    }

    fn l(&self) -> Option<u32> {
        link(self.l)
    }

    fn r(&self) -> Option<u32> {
        link(self.r)
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v.unwrap_or(NIL);
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v.unwrap_or(NIL);
    }
}

/// Red-black specific node behavior. Links are raw indices, [`NIL`] included.
pub trait RbNodeLike: Node {
    fn color(&self) -> Color;
    fn set_color(&mut self, c: Color);
    fn parent(&self) -> u32;
    fn set_parent(&mut self, p: u32);
    fn left(&self) -> u32;
    fn set_left(&mut self, l: u32);
    fn right(&self) -> u32;
    fn set_right(&mut self, r: u32);
}

impl RbNodeLike for RbNode {
    fn color(&self) -> Color {
        self.c
    }

    fn set_color(&mut self, c: Color) {
        self.c = c;
    }

    fn parent(&self) -> u32 {
        self.p
    }

    fn set_parent(&mut self, p: u32) {
        self.p = p;
    }

    fn left(&self) -> u32 {
        self.l
    }

    fn set_left(&mut self, l: u32) {
        self.l = l;
    }

    fn right(&self) -> u32 {
        self.r
    }

    fn set_right(&mut self, r: u32) {
        self.r = r;
    }
}
