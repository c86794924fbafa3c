//! Generic set core shared by the tree facades.

pub mod set;

pub use set::{ForestSet, Removed, TreeOps};
