//! Tree configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What `insert` does with a key that is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Leave the tree unchanged and report `false`.
    Reject,
    /// Insert another node; an equal key descends to the right.
    AllowRight,
}

/// Per-tree configuration.
///
/// The baseline and AVL trees default to [`TreeConfig::unique`], the
/// red-black tree to [`TreeConfig::multiset`].
///
/// ```
/// use ordered_forest::config::{DuplicatePolicy, TreeConfig};
///
/// let config = TreeConfig::from_json(r#"{"duplicates":"allow_right"}"#).unwrap();
/// assert_eq!(config.duplicates, DuplicatePolicy::AllowRight);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeConfig {
    pub duplicates: DuplicatePolicy,
}

impl TreeConfig {
    /// Keys are unique; re-inserting is a no-op.
    pub const fn unique() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
        }
    }

    /// Equal keys are kept as separate nodes.
    pub const fn multiset() -> Self {
        Self {
            duplicates: DuplicatePolicy::AllowRight,
        }
    }

    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn allows_duplicates(&self) -> bool {
        self.duplicates == DuplicatePolicy::AllowRight
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::unique()
    }
}
