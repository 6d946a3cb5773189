mod common;

use booktree::{BookTree, RebalanceConfig, TreeError};
use common::{balanced_height_bound, tree_of};
use proptest::prelude::*;

fn keys() -> impl Strategy<Value = Vec<i64>> {
    // Narrow key range so duplicates show up regularly
    proptest::collection::vec(-50i64..50, 0..200)
}

fn sorted(mut keys: Vec<i64>) -> Vec<i64> {
    keys.sort_unstable();
    keys
}

proptest! {
    #[test]
    fn inorder_is_sorted_after_inserts(keys in keys()) {
        let tree = tree_of(&keys);
        prop_assert_eq!(tree.inorder_keys(), sorted(keys));
    }

    #[test]
    fn balance_preserves_keys_and_order(keys in keys()) {
        let mut tree = tree_of(&keys);
        let before = tree.inorder_keys();

        tree.balance();
        prop_assert_eq!(tree.inorder_keys(), before);
        prop_assert_eq!(tree.len(), keys.len());
    }

    #[test]
    fn balance_bounds_height(keys in keys()) {
        let mut tree = tree_of(&keys);
        tree.balance_with(&RebalanceConfig::always_rebuild());

        prop_assert!(tree.is_balanced());
        prop_assert!(
            tree.depth() <= balanced_height_bound(keys.len()),
            "depth {} exceeds bound for {} nodes",
            tree.depth(),
            keys.len()
        );
    }

    #[test]
    fn rebuilding_balanced_tree_stays_balanced(keys in keys()) {
        let mut tree = tree_of(&keys);
        tree.balance();
        let height = tree.depth();
        let contents = tree.inorder_keys();

        tree.balance_with(&RebalanceConfig::always_rebuild());
        prop_assert!(tree.is_balanced());
        prop_assert!(tree.depth() <= height);
        prop_assert_eq!(tree.inorder_keys(), contents);

        // A minimal-height rebuild reproduces itself exactly
        let shape = tree.fingerprint();
        tree.balance_with(&RebalanceConfig::always_rebuild());
        prop_assert_eq!(tree.fingerprint(), shape);
    }

    #[test]
    fn balanced_check_matches_heights(keys in keys()) {
        let tree = tree_of(&keys);
        if let booktree::BalanceCheck::Balanced { height } = tree.check_balance() {
            prop_assert_eq!(height, tree.depth());
        }
    }

    #[test]
    fn mirror_twice_restores_structure(keys in keys()) {
        let mut tree = tree_of(&keys);
        let shape = tree.fingerprint();
        let preorder = tree.preorder_keys();

        tree.mirror();
        let mut reversed = tree.inorder_keys();
        reversed.reverse();
        prop_assert_eq!(reversed, sorted(keys.clone()));

        tree.mirror();
        prop_assert_eq!(tree.fingerprint(), shape);
        prop_assert_eq!(tree.preorder_keys(), preorder);
    }

    #[test]
    fn balance_after_mirror_restores_search(keys in keys()) {
        let mut tree = tree_of(&keys);
        tree.mirror();
        tree.balance();

        prop_assert_eq!(tree.inorder_keys(), sorted(keys.clone()));
        prop_assert!(tree.is_balanced());
        for key in &keys {
            prop_assert!(tree.contains(*key));
        }
    }

    #[test]
    fn clear_empties_fully(keys in keys()) {
        let mut tree = tree_of(&keys);
        prop_assert_eq!(tree.clear(), keys.len());
        prop_assert_eq!(tree.depth(), 0);
        prop_assert!(tree.is_empty());

        for key in keys {
            prop_assert_eq!(tree.get(key).unwrap_err(), TreeError::NotFound { key });
        }
    }

    #[test]
    fn every_inserted_key_is_found(keys in keys(), rebalance in any::<bool>()) {
        let mut tree = tree_of(&keys);
        if rebalance {
            tree.balance();
        }
        for &key in &keys {
            prop_assert_eq!(tree.get(key).map(|n| n.key()), Ok(key));
        }
    }
}

#[test]
fn sorted_insertion_degenerates_then_recovers() {
    let mut tree = BookTree::new();
    tree.extend((1..=1023).map(booktree::Book::keyed)).unwrap();
    assert_eq!(tree.depth(), 1023);

    tree.balance();
    assert_eq!(tree.depth(), 10);
    assert!(tree.is_balanced());
}
