//! Linear staging list used while rebalancing
//!
//! A doubly linked list of [`NodeId`]s in in-order position. Entries live
//! in a transient vector and link by position; the tree nodes they name are
//! only referenced, never owned. Sub-lists are [`Span`]s over the same
//! entries: splitting a span cuts the links at its boundary so each half can
//! be scanned on its own.
//!
//! A mirrored tree flattens descending. [`StagingList::reverse`] swaps every
//! `prev`/`next` pair so the list reads ascending again.

use std::cmp::Ordering;

use crate::tree::{BookTree, NodeId};

#[derive(Debug, Clone, Copy)]
struct Entry {
    node: NodeId,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Head and tail of a (sub-)list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Span {
    pub head: Option<usize>,
    pub tail: Option<usize>,
}

impl Span {
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Single-entry span
    pub fn is_singleton(&self) -> bool {
        self.head.is_some() && self.head == self.tail
    }
}

/// Direction of keys along the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyOrder {
    /// Non-decreasing (also covers all-equal and short lists)
    Ascending,
    /// Non-increasing with at least one strict descent
    Descending,
    /// Neither
    Mixed,
}

/// Transient staging list
#[derive(Debug, Default)]
pub(crate) struct StagingList {
    entries: Vec<Entry>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl StagingList {
    /// Flatten a tree in-order.
    pub fn from_tree(tree: &BookTree) -> Self {
        let mut list = Self {
            entries: Vec::with_capacity(tree.len()),
            head: None,
            tail: None,
        };
        for id in tree.inorder().ids() {
            list.push_back(id);
        }
        list
    }

    fn push_back(&mut self, node: NodeId) {
        let idx = self.entries.len();
        let prev = self.tail;
        if let Some(prev) = prev {
            self.entries[prev].next = Some(idx);
        }
        self.entries.push(Entry {
            node,
            prev,
            next: None,
        });
        self.head.get_or_insert(idx);
        self.tail = Some(idx);
    }

    /// Reverse the list in place by swapping every entry's links.
    pub fn reverse(&mut self) {
        for entry in &mut self.entries {
            std::mem::swap(&mut entry.prev, &mut entry.next);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Compare each key with its successor, head to tail.
    pub fn key_order(&self, tree: &BookTree) -> KeyOrder {
        let (mut rises, mut falls) = (false, false);
        let mut cursor = self.head;

        while let Some(idx) = cursor {
            let entry = self.entries[idx];
            if let Some(next) = entry.next {
                let key = tree.node(entry.node).key();
                match key.cmp(&tree.node(self.entries[next].node).key()) {
                    Ordering::Less => rises = true,
                    Ordering::Greater => falls = true,
                    Ordering::Equal => {}
                }
            }
            cursor = entry.next;
        }

        match (rises, falls) {
            (_, false) => KeyOrder::Ascending,
            (false, true) => KeyOrder::Descending,
            (true, true) => KeyOrder::Mixed,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Span covering the whole list.
    pub fn full(&self) -> Span {
        Span {
            head: self.head,
            tail: self.tail,
        }
    }

    /// Tree node referenced by an entry.
    pub fn node(&self, entry: usize) -> NodeId {
        self.entries[entry].node
    }

    /// Keys along a span, following `next` links.
    #[cfg(test)]
    pub fn nodes(&self, span: Span) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = span.head;
        while let Some(idx) = cursor {
            out.push(self.entries[idx].node);
            cursor = self.entries[idx].next;
        }
        out
    }

    /// Middle entry of a span by slow/fast scan.
    ///
    /// Slow advances one link, fast two, until fast or its successor runs
    /// off the span. For `n` entries this lands on position `n / 2`.
    pub fn center(&self, span: Span) -> Option<usize> {
        let mut slow = span.head?;
        let mut fast = Some(slow);

        while let Some(step) = fast.and_then(|f| self.entries[f].next) {
            slow = self.entries[slow].next?;
            fast = self.entries[step].next;
        }

        Some(slow)
    }

    /// Split a span around `center` into two standalone spans.
    ///
    /// The entry before `center` becomes the left tail with its `next`
    /// cleared; the entry after becomes the right head with its `prev`
    /// cleared. `center` itself is unlinked from both.
    pub fn split(&mut self, span: Span, center: usize) -> (Span, Span) {
        let before = self.entries[center].prev;
        let after = self.entries[center].next;

        if let Some(b) = before {
            self.entries[b].next = None;
        }
        if let Some(a) = after {
            self.entries[a].prev = None;
        }
        self.entries[center].prev = None;
        self.entries[center].next = None;

        let left = match before {
            Some(b) => Span {
                head: span.head,
                tail: Some(b),
            },
            None => Span::default(),
        };
        let right = match after {
            Some(a) => Span {
                head: Some(a),
                tail: span.tail,
            },
            None => Span::default(),
        };

        (left, right)
    }
}
