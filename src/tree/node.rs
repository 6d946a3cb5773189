//! Tree node representation
//!
//! Nodes live in the tree's arena and refer to their children by [`NodeId`].
//! Links never own: the arena is the single owner of every node, so
//! rebalancing and mirroring only rewrite ids.

use std::fmt;

use crate::book::{Book, Key};

/// Index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena slot backing this id.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tree node owning one book record.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub(crate) book: Book,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl TreeNode {
    pub(crate) fn new(book: Book) -> Self {
        Self {
            book,
            left: None,
            right: None,
        }
    }

    /// Record stored in this node.
    #[inline]
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Ordering key of the stored record.
    #[inline]
    pub fn key(&self) -> Key {
        self.book.key
    }

    /// Left child, if any.
    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child, if any.
    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Drop both child links.
    #[inline]
    pub(crate) fn detach(&mut self) {
        self.left = None;
        self.right = None;
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.book.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detach_clears_links() {
        let mut node = TreeNode::new(Book::keyed(7));
        node.left = Some(NodeId(1));
        node.right = Some(NodeId(2));
        assert!(!node.is_leaf());

        node.detach();
        assert!(node.is_leaf());
        assert_eq!(node.key(), 7);
    }

    #[test]
    fn test_display_wraps_key() {
        let node = TreeNode::new(Book::keyed(42));
        assert_eq!(node.to_string(), "{42}");
        assert_eq!(NodeId(3).to_string(), "#3");
    }
}
