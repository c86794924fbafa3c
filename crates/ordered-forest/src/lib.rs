//! Arena-based ordered integer sets.
//!
//! Three interchangeable trees share one operation surface
//! ([`OrderedSet`]): `insert`, `search`, `delete` and a lazy ascending
//! `inorder` walk.
//!
//! - [`BstTree`]: unbalanced baseline.
//! - [`AvlTree`]: keeps `|height(left) - height(right)| <= 1` at every node
//!   with single and double rotations.
//! - [`RbTree`]: keeps the red-black color invariants with a case-driven
//!   fix-up walk over a shared black sentinel.
//!
//! Nodes live in an [`Arena`] and link to each other by `u32` index; the
//! red-black parent link is an index too, never an owner.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] and [`OrderedSet`] traits, [`Key`] |
//! | [`arena`] | [`Arena`] slot storage with free list and reserved sentinel slot |
//! | [`util`] | shared find / size / height / in-order primitives |
//! | [`data_types`] | [`ForestSet`](data_types::ForestSet) core and the [`TreeOps`](data_types::TreeOps) strategy trait |
//! | [`bst`] | baseline tree |
//! | [`avl`] | AVL rotations and retracing |
//! | [`red_black`] | red-black rotations, transplant and fix-ups |
//! | [`config`] | [`TreeConfig`] and [`DuplicatePolicy`] |
//! | [`error`] | [`InvariantError`] and [`ConfigError`] |
//!
//! ```
//! use ordered_forest::{AvlTree, OrderedSet};
//!
//! fn fill<T: OrderedSet + Default>(keys: &[i64]) -> T {
//!     let mut tree = T::default();
//!     for &k in keys {
//!         tree.insert(k);
//!     }
//!     tree
//! }
//!
//! let tree: AvlTree = fill(&[9, 5, 10, 0, 6, 11, -1, 1, 2]);
//! assert_eq!(tree.inorder().collect::<Vec<_>>(), [-1, 0, 1, 2, 5, 6, 9, 10, 11]);
//! ```

pub mod arena;
pub mod avl;
pub mod bst;
pub mod config;
#[path = "data-types/mod.rs"]
pub mod data_types;
pub mod error;
#[path = "red-black/mod.rs"]
pub mod red_black;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use avl::AvlTree;
pub use bst::BstTree;
pub use config::{DuplicatePolicy, TreeConfig};
pub use error::{ConfigError, InvariantError};
pub use red_black::RbTree;
pub use types::{Key, Node, OrderedSet};
