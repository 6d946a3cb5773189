//! Depth-first and level-order walks
//!
//! All walks are lazy and use an explicit stack or queue instead of
//! recursion, so stack usage stays flat on skewed trees. Each walk borrows
//! the tree; calling the constructor again restarts it.

use std::collections::VecDeque;

use super::{BookTree, NodeId, TreeNode};
use crate::book::Key;

/// Pre-order walk (node, left, right)
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    tree: &'a BookTree,
    stack: Vec<NodeId>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(tree: &'a BookTree) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }

    fn next_id(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(id)
    }
}

/// In-order walk (left, node, right)
///
/// Ascending by key while the ordering invariant holds.
#[derive(Debug, Clone)]
pub struct Inorder<'a> {
    tree: &'a BookTree,
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
}

impl<'a> Inorder<'a> {
    pub(crate) fn new(tree: &'a BookTree) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            cursor: tree.root(),
        }
    }

    fn next_id(&mut self) -> Option<NodeId> {
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = self.tree.node(id).left();
        }

        let id = self.stack.pop()?;
        self.cursor = self.tree.node(id).right();
        Some(id)
    }

    /// Remaining node ids, in order.
    pub fn ids(mut self) -> impl Iterator<Item = NodeId> + 'a {
        std::iter::from_fn(move || self.next_id())
    }
}

/// Post-order walk (left, right, node)
#[derive(Debug, Clone)]
pub struct Postorder<'a> {
    tree: &'a BookTree,
    /// (node, children already scheduled)
    stack: Vec<(NodeId, bool)>,
}

impl<'a> Postorder<'a> {
    pub(crate) fn new(tree: &'a BookTree) -> Self {
        Self {
            tree,
            stack: tree.root().map(|id| (id, false)).into_iter().collect(),
        }
    }

    fn next_id(&mut self) -> Option<NodeId> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            if expanded {
                return Some(id);
            }

            let node = self.tree.node(id);
            self.stack.push((id, true));
            self.stack.extend(node.right().map(|r| (r, false)));
            self.stack.extend(node.left().map(|l| (l, false)));
        }
    }

    /// Remaining node ids, in order.
    pub fn ids(mut self) -> impl Iterator<Item = NodeId> + 'a {
        std::iter::from_fn(move || self.next_id())
    }
}

/// Level-order (breadth-first) walk
///
/// FIFO queue seeded with the root; children enqueued left then right.
#[derive(Debug, Clone)]
pub struct LevelOrder<'a> {
    tree: &'a BookTree,
    queue: VecDeque<NodeId>,
}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(tree: &'a BookTree) -> Self {
        Self {
            tree,
            queue: tree.root().into_iter().collect(),
        }
    }

    fn next_id(&mut self) -> Option<NodeId> {
        let id = self.queue.pop_front()?;
        let node = self.tree.node(id);
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(id)
    }

    /// Group the remaining walk into whole levels.
    ///
    /// Each item drains exactly the nodes queued when it starts, so the
    /// number of items is the number of levels.
    pub fn levels(mut self) -> impl Iterator<Item = Vec<NodeId>> + 'a {
        std::iter::from_fn(move || {
            if self.queue.is_empty() {
                return None;
            }
            let width = self.queue.len();
            Some((0..width).filter_map(|_| self.next_id()).collect())
        })
    }
}

macro_rules! node_iterator {
    ($walk:ident) => {
        impl<'a> Iterator for $walk<'a> {
            type Item = &'a TreeNode;

            fn next(&mut self) -> Option<Self::Item> {
                let tree = self.tree;
                self.next_id().map(|id| tree.node(id))
            }
        }
    };
}

node_iterator!(Preorder);
node_iterator!(Inorder);
node_iterator!(Postorder);
node_iterator!(LevelOrder);

impl BookTree {
    /// Pre-order walk over nodes.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self)
    }

    /// In-order walk over nodes.
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder::new(self)
    }

    /// Post-order walk over nodes.
    pub fn postorder(&self) -> Postorder<'_> {
        Postorder::new(self)
    }

    /// Level-order walk over nodes.
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self)
    }

    /// Pre-order keys.
    pub fn preorder_keys(&self) -> Vec<Key> {
        self.preorder().map(TreeNode::key).collect()
    }

    /// In-order keys.
    pub fn inorder_keys(&self) -> Vec<Key> {
        self.inorder().map(TreeNode::key).collect()
    }

    /// Post-order keys.
    pub fn postorder_keys(&self) -> Vec<Key> {
        self.postorder().map(TreeNode::key).collect()
    }

    /// Breadth-first keys.
    pub fn breadth_first_keys(&self) -> Vec<Key> {
        self.level_order().map(TreeNode::key).collect()
    }

    /// Depth-first keys. Same as [`BookTree::preorder_keys`].
    pub fn dfs_keys(&self) -> Vec<Key> {
        self.preorder_keys()
    }
}
