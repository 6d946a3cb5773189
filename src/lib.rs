//! # Book Tree with On-Demand Rebalancing
//!
//! An in-memory binary search tree of book records keyed by integer id.
//! Inserts never rebalance, so insertion order decides the shape and a
//! sorted insertion order yields a linked list. Rebalancing is an explicit,
//! whole-tree operation.
//!
//! ## Core Algorithm
//!
//! 1. **Flatten**: in-order walk into a doubly linked staging list (sorted)
//! 2. **Median split**: the center of each sub-list becomes a subtree root
//! 3. **Reattach**: rewrite child links only; nodes and records stay put
//!
//! Result: O(n) time, height ⌈log2(n + 1)⌉, same in-order key sequence.
//!
//! ## Usage Example
//!
//! ```
//! use booktree::{Book, BookTree};
//!
//! let mut tree = BookTree::new();
//! for key in 1..=7 {
//!     tree.insert(Book::keyed(key))?;
//! }
//! assert_eq!(tree.depth(), 7);
//!
//! tree.balance();
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(tree.inorder_keys(), vec![1, 2, 3, 4, 5, 6, 7]);
//! # Ok::<(), booktree::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod balance;   // Balance check and median-split rebuild
pub mod book;      // Record type
pub mod catalogue; // Seed data and record text entry
pub mod config;    // Rebalance and input limits
pub mod mirror;    // Left/right swap
pub mod tree;      // Tree storage, search, traversals

// Re-exports for convenience
pub use balance::{BalanceCheck, RebalanceOutcome};
pub use book::{Book, Key};
pub use config::{RebalanceConfig, RecordLimits};
pub use tree::{BookTree, NodeId, TreeNode};

use thiserror::Error;

/// Errors raised by tree operations and record entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// No record with the requested key is reachable
    #[error("no book with key {key}")]
    NotFound {
        /// Key that was searched for
        key: Key,
    },

    /// Node storage could not grow
    #[error("allocation failed while growing tree to {requested} nodes")]
    AllocationFailure {
        /// Node count that could not be reserved
        requested: usize,
    },

    /// Record text rejected at the input boundary
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TreeError::NotFound { key: 7 }.to_string(),
            "no book with key 7"
        );
        assert_eq!(
            TreeError::InvalidRecord("line 3: title is empty".into()).to_string(),
            "invalid record: line 3: title is empty"
        );
    }
}
