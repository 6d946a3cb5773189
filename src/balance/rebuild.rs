//! Median-split rebuild
//!
//! Flatten the tree into a [`StagingList`], then for each span pick the
//! center entry as subtree root and recurse on the halves. Only child ids
//! are rewritten; no node or record is allocated or dropped.
//!
//! A descending flatten (a mirrored tree) is reversed before the rebuild,
//! so the result is always a search tree again.

use tracing::{debug, warn};

use super::staging::{KeyOrder, Span, StagingList};
use super::BalanceCheck;
use crate::config::RebalanceConfig;
use crate::tree::{BookTree, NodeId};

/// What a rebalance call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebalanceOutcome {
    /// Tree had no nodes
    Empty,

    /// Tree was already balanced and the rebuild was skipped
    AlreadyBalanced {
        /// Unchanged height
        height: usize,
    },

    /// Tree was rebuilt
    Rebuilt {
        /// Height before the rebuild
        height_before: usize,
        /// Height after the rebuild
        height_after: usize,
    },
}

impl RebalanceOutcome {
    /// Whether child links were rewritten.
    pub fn rebuilt(&self) -> bool {
        matches!(self, RebalanceOutcome::Rebuilt { .. })
    }
}

impl BookTree {
    /// Rebalance with the default configuration.
    ///
    /// Already-balanced trees are left untouched.
    pub fn balance(&mut self) -> RebalanceOutcome {
        self.balance_with(&RebalanceConfig::default())
    }

    /// Rebalance in place.
    ///
    /// Afterwards keys read ascending in-order and every node's subtree
    /// heights differ by at most one. A mirrored tree is rebuilt in
    /// ascending order, even when its shape is already balanced.
    pub fn balance_with(&mut self, config: &RebalanceConfig) -> RebalanceOutcome {
        if self.is_empty() {
            return RebalanceOutcome::Empty;
        }

        let mut list = StagingList::from_tree(self);
        let order = list.key_order(self);
        match order {
            KeyOrder::Ascending => {}
            KeyOrder::Descending => {
                debug!(nodes = list.len(), "descending in-order, restoring key order");
                list.reverse();
            }
            KeyOrder::Mixed => {
                warn!(nodes = list.len(), "in-order keys are not sorted, rebuilding as walked");
            }
        }

        if config.skip_if_balanced && order == KeyOrder::Ascending {
            if let BalanceCheck::Balanced { height } = self.check_balance() {
                debug!(height, "tree already balanced, skipping rebuild");
                return RebalanceOutcome::AlreadyBalanced { height };
            }
        }

        let height_before = self.depth();
        let span = list.full();
        let root = build(self, &mut list, span);
        self.set_root(root);

        let height_after = self.depth();
        debug!(
            nodes = list.len(),
            height_before, height_after, "rebuilt tree by median split"
        );

        RebalanceOutcome::Rebuilt {
            height_before,
            height_after,
        }
    }
}

/// Build a balanced subtree from `span`, returning its root.
///
/// Recursion depth is the height of the result, O(log n).
fn build(tree: &mut BookTree, list: &mut StagingList, span: Span) -> Option<NodeId> {
    if span.is_empty() {
        return None;
    }

    let center = list.center(span)?;
    let root = list.node(center);
    tree.node_mut(root).detach();

    if span.is_singleton() {
        return Some(root);
    }

    let (left_span, right_span) = list.split(span, center);
    let left = build(tree, list, left_span);
    let right = build(tree, list, right_span);

    let node = tree.node_mut(root);
    node.left = left;
    node.right = right;
    Some(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{Book, Key};

    fn tree_of(keys: impl IntoIterator<Item = Key>) -> BookTree {
        let mut tree = BookTree::new();
        tree.extend(keys.into_iter().map(Book::keyed)).unwrap();
        tree
    }

    #[test]
    fn test_empty_tree_is_noop() {
        let mut tree = BookTree::new();
        assert_eq!(tree.balance(), RebalanceOutcome::Empty);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_single_node() {
        let mut tree = tree_of([1]);
        assert_eq!(
            tree.balance(),
            RebalanceOutcome::AlreadyBalanced { height: 1 }
        );
        assert_eq!(
            tree.balance_with(&RebalanceConfig::always_rebuild()),
            RebalanceOutcome::Rebuilt {
                height_before: 1,
                height_after: 1,
            }
        );
    }

    #[test]
    fn test_skewed_chain_rebuilt() {
        let mut tree = tree_of(1..=7);
        let outcome = tree.balance();

        assert_eq!(
            outcome,
            RebalanceOutcome::Rebuilt {
                height_before: 7,
                height_after: 3,
            }
        );
        assert_eq!(tree.breadth_first_keys(), vec![4, 2, 6, 1, 3, 5, 7]);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_even_count_takes_upper_middle() {
        let mut tree = tree_of(1..=4);
        tree.balance();
        assert_eq!(tree.levels(), vec![vec![3], vec![2, 4], vec![1]]);
    }

    #[test]
    fn test_pair_keeps_both_nodes() {
        let mut tree = tree_of([1, 2]);
        tree.balance_with(&RebalanceConfig::always_rebuild());
        assert_eq!(tree.inorder_keys(), vec![1, 2]);
        assert_eq!(tree.levels(), vec![vec![2], vec![1]]);
    }

    #[test]
    fn test_duplicates_survive_rebuild() {
        let mut tree = tree_of([5, 5, 5, 5, 5]);
        tree.balance();
        assert_eq!(tree.inorder_keys(), vec![5; 5]);
        assert_eq!(tree.len(), 5);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_mirrored_chain_rebuilt_ascending() {
        let mut tree = tree_of(1..=7);
        tree.mirror();
        assert_eq!(tree.inorder_keys(), vec![7, 6, 5, 4, 3, 2, 1]);

        assert!(tree.balance().rebuilt());
        assert_eq!(tree.breadth_first_keys(), vec![4, 2, 6, 1, 3, 5, 7]);
        assert!((1..=7).all(|key| tree.contains(key)));
    }

    #[test]
    fn test_mirrored_balanced_tree_is_not_skipped() {
        let mut tree = tree_of([4, 2, 6, 1, 3, 5, 7]);
        tree.mirror();
        assert!(tree.is_balanced());

        assert_eq!(
            tree.balance(),
            RebalanceOutcome::Rebuilt {
                height_before: 3,
                height_after: 3,
            }
        );
        assert_eq!(tree.inorder_keys(), (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_records_stay_attached() {
        let mut tree = BookTree::new();
        for key in 1..=5 {
            tree.insert(Book::new(key, format!("t{key}"), "a", 2000, 1, 1))
                .unwrap();
        }
        tree.balance();
        for key in 1..=5 {
            assert_eq!(tree.get(key).unwrap().book().title, format!("t{key}"));
        }
    }
}
