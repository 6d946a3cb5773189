//! Binary search tree of book records
//!
//! Keys strictly less than a node's key go left, everything else
//! (duplicates included) goes right. Nothing rebalances on insert; see
//! [`crate::balance`] for the on-demand rebuild.
//!
//! Storage is an arena of [`TreeNode`]s addressed by [`NodeId`]. The arena
//! owns every node and record for the lifetime of the tree.

mod node;
mod traversal;

pub use node::{NodeId, TreeNode};
pub use traversal::{Inorder, LevelOrder, Postorder, Preorder};

use bitvec::prelude::*;
use tracing::{debug, trace, warn};

use crate::book::{Book, Key};
use crate::TreeError;

/// Binary search tree keyed by book key.
#[derive(Debug, Clone, Default)]
pub struct BookTree {
    /// Node arena (single owner of every node)
    nodes: Vec<TreeNode>,

    /// Root slot, `None` when empty
    root: Option<NodeId>,
}

impl BookTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds no records.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root node id.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Resolve a node id to its node.
    ///
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    /// Insert a record.
    ///
    /// Walks from the root, going left when the visited key is greater than
    /// the incoming key and right otherwise, and attaches the new node at the
    /// first empty slot. Duplicate keys are kept and land to the right.
    pub fn insert(&mut self, book: Book) -> Result<NodeId, TreeError> {
        self.nodes
            .try_reserve(1)
            .map_err(|_| TreeError::AllocationFailure {
                requested: self.nodes.len() + 1,
            })?;

        let key = book.key;
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(book));

        let Some(mut current) = self.root else {
            self.root = Some(id);
            trace!(key, "inserted root");
            return Ok(id);
        };

        let mut depth = 1;
        loop {
            let node = &mut self.nodes[current.0];
            let slot = if node.key() > key {
                &mut node.left
            } else {
                &mut node.right
            };

            match *slot {
                Some(next) => {
                    current = next;
                    depth += 1;
                }
                None => {
                    *slot = Some(id);
                    trace!(key, depth, "inserted");
                    return Ok(id);
                }
            }
        }
    }

    /// Insert every record from an iterator, in order.
    pub fn extend<I>(&mut self, books: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = Book>,
    {
        for book in books {
            self.insert(book)?;
        }
        Ok(())
    }

    /// Find the node holding `key`.
    ///
    /// O(height): linear on a skewed tree, logarithmic after
    /// [`BookTree::balance`]. Results are meaningless on a mirrored tree.
    pub fn get(&self, key: Key) -> Result<&TreeNode, TreeError> {
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = &self.nodes[id.0];
            cursor = match key.cmp(&node.key()) {
                std::cmp::Ordering::Equal => return Ok(node),
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
            };
        }

        Err(TreeError::NotFound { key })
    }

    /// Whether a record with `key` is reachable by search.
    pub fn contains(&self, key: Key) -> bool {
        self.get(key).is_ok()
    }

    /// Number of levels (0 for an empty tree).
    ///
    /// Counts completed rounds of the level-order scan.
    pub fn depth(&self) -> usize {
        self.level_order().levels().count()
    }

    /// Keys grouped by level, root level first.
    pub fn levels(&self) -> Vec<Vec<Key>> {
        self.level_order()
            .levels()
            .map(|level| level.into_iter().map(|id| self.node(id).key()).collect())
            .collect()
    }

    /// Level-by-level display, one `Level n:` line per level.
    pub fn render_levels(&self) -> String {
        if self.is_empty() {
            return "tree is empty\n".to_string();
        }

        let mut out = String::new();
        for (depth, level) in self.levels().iter().enumerate() {
            out.push_str(&format!("Level {depth}:"));
            for key in level {
                out.push_str(&format!(" {{{key}}}"));
            }
            out.push('\n');
        }
        out
    }

    /// Release every node and record, leaving the tree empty.
    ///
    /// Walks breadth-first from the root. A slot already marked in the
    /// release bitmap is skipped, so a node reachable twice is released
    /// once. Returns the number of nodes reached and released.
    pub fn clear(&mut self) -> usize {
        let Some(root) = self.root.take() else {
            return 0;
        };

        let mut released = bitvec![0; self.nodes.len()];
        let mut queue = std::collections::VecDeque::from([root]);
        let mut count = 0;

        while let Some(id) = queue.pop_front() {
            if released.replace(id.0, true) {
                warn!(node = %id, "node linked more than once, releasing it once");
                continue;
            }
            count += 1;

            let node = &mut self.nodes[id.0];
            queue.extend(node.left.take());
            queue.extend(node.right.take());
        }

        let unreachable = released.count_zeros();
        if unreachable > 0 {
            warn!(unreachable, "arena held nodes unreachable from the root");
        }
        self.nodes = Vec::new();
        debug!(released = count, "cleared tree");
        count
    }

    /// Structure fingerprint: hashes the pre-order walk with null markers.
    ///
    /// Two trees share a fingerprint iff they have the same shape and the
    /// same key at every position.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        let mut stack = vec![self.root];

        while let Some(slot) = stack.pop() {
            match slot {
                None => {
                    hasher.update(&[0]);
                }
                Some(id) => {
                    let node = self.node(id);
                    hasher.update(&[1]);
                    hasher.update(&node.key().to_le_bytes());
                    stack.push(node.right);
                    stack.push(node.left);
                }
            }
        }

        hasher.finalize()
    }
}
