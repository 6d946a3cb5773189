//! Left/right mirroring
//!
//! Swaps every node's children. The result is ordered descending, so
//! [`BookTree::get`] is unreliable until the tree is mirrored back or
//! rebalanced; [`BookTree::balance`] rebuilds it in ascending order.

use tracing::debug;

use crate::tree::{BookTree, NodeId};

impl BookTree {
    /// Mirror the tree in place (post-order swap, root included).
    pub fn mirror(&mut self) {
        let order: Vec<NodeId> = self.postorder().ids().collect();
        for &id in &order {
            let node = self.node_mut(id);
            std::mem::swap(&mut node.left, &mut node.right);
        }
        debug!(nodes = order.len(), "mirrored tree");
    }
}
