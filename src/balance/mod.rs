//! Height-balance check and on-demand rebalancing
//!
//! Rebalancing turns an arbitrarily skewed tree into a height-balanced one
//! in O(n): flatten to a sorted staging list, then rebuild by recursive
//! median split. Height after rebuild is ⌈log2(n + 1)⌉.

mod rebuild;
mod staging;

pub use rebuild::RebalanceOutcome;

use crate::book::Key;
use crate::tree::{BookTree, NodeId};

/// Result of a height-balance check
///
/// Height and imbalance travel on separate variants, so no height value
/// can be mistaken for an imbalance signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceCheck {
    /// Every node's subtrees differ in height by at most one
    Balanced {
        /// Height of the checked tree (0 when empty)
        height: usize,
    },

    /// First node found whose subtree heights differ by more than one
    Unbalanced {
        /// Key of the offending node
        key: Key,
        /// Height of its left subtree
        left_height: usize,
        /// Height of its right subtree
        right_height: usize,
    },
}

impl BalanceCheck {
    /// True for [`BalanceCheck::Balanced`].
    pub fn is_balanced(&self) -> bool {
        matches!(self, BalanceCheck::Balanced { .. })
    }
}

impl BookTree {
    /// Bottom-up balance check.
    ///
    /// Visits nodes in post-order so both child heights are known when a
    /// node is reached; stops at the first unbalanced node. An empty
    /// subtree has height 0.
    pub fn check_balance(&self) -> BalanceCheck {
        let mut heights = vec![0usize; self.len()];
        let height_of = |heights: &[usize], slot: Option<NodeId>| {
            slot.map_or(0, |id| heights[id.index()])
        };

        for id in self.postorder().ids() {
            let node = self.node(id);
            let left_height = height_of(&heights, node.left());
            let right_height = height_of(&heights, node.right());

            if left_height.abs_diff(right_height) > 1 {
                return BalanceCheck::Unbalanced {
                    key: node.key(),
                    left_height,
                    right_height,
                };
            }
            heights[id.index()] = 1 + left_height.max(right_height);
        }

        BalanceCheck::Balanced {
            height: height_of(&heights, self.root()),
        }
    }

    /// Whether every node's subtree heights differ by at most one.
    pub fn is_balanced(&self) -> bool {
        self.check_balance().is_balanced()
    }
}
