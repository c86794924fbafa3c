//! Error types.
//!
//! Tree operations themselves never fail. These errors come from the
//! validators (`assert_valid` and the per-variant `assert_*` helpers) and from
//! loading a [`TreeConfig`](crate::config::TreeConfig).

use thiserror::Error;

use crate::types::Key;

/// A broken tree invariant, reported by a validator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Root has parent")]
    RootHasParent,
    #[error("Broken parent link below node {parent}")]
    BrokenParentLink { parent: u32 },
    #[error("Node order violated: {prev} before {next}")]
    OrderViolated { prev: Key, next: Key },
    #[error("Height mismatch at key {key}: cached {cached}, actual {actual}")]
    HeightMismatch { key: Key, cached: i32, actual: i32 },
    #[error("AVL balance violated at key {key}: balance {balance}")]
    Unbalanced { key: Key, balance: i32 },
    #[error("Root is not black")]
    RootNotBlack,
    #[error("Sentinel is not black")]
    SentinelNotBlack,
    #[error("Red node {key} has red child")]
    RedRedViolation { key: Key },
    #[error("Black height mismatch at key {key}: left {left}, right {right}")]
    BlackHeightMismatch { key: Key, left: usize, right: usize },
    #[error("Length mismatch: recorded {recorded}, reachable {reachable}")]
    LengthMismatch { recorded: usize, reachable: usize },
}

/// Failure to load or dump a [`TreeConfig`](crate::config::TreeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid tree config: {0}")]
    Json(#[from] serde_json::Error),
}
