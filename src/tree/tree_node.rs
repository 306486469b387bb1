use core::cmp::Ordering;

use common::Symbol;

/// Position of a node in the tree's node vec. Stable for the lifetime of the tree.
pub type NodeId = usize;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        /// the number of occurences
        count: usize,
    },
    Internal {
        /// sum of the counts of both children
        count: usize,
        /// position of the left node in the array, reached with bit 0
        left: NodeId,
        /// position of the right node in the array, reached with bit 1
        right: NodeId,
    },
}

impl Node {
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            Node::Leaf { count, .. } | Node::Internal { count, .. } => *count,
        }
    }

    #[inline]
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// `(left, right)` for internal nodes, `None` for leaves
    #[inline]
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((*left, *right)),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Node::Leaf { symbol, count } => f.write_fmt(format_args!(
                "Leaf{{ symbol:{:?} count:{} }}",
                symbol, count
            )),
            Node::Internal { count, left, right } => f.write_fmt(format_args!(
                "Internal{{ count:{} left:{} right:{} }}",
                count, left, right
            )),
        }
    }
}

/// Entry of the priority queue used while building the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeapEntry {
    pub(crate) count: usize,
    pub(crate) node: NodeId,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // The ordering on counts is flipped.
        // In case of a tie the lower node id wins. Leaves get their ids in order of first
        // appearance and parents are appended in creation order, so the tie break is fixed.
        other
            .count
            .cmp(&self.count)
            .then_with(|| other.node.cmp(&self.node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_count_then_lowest_id() {
        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry { count: 2, node: 0 });
        heap.push(HeapEntry { count: 1, node: 3 });
        heap.push(HeapEntry { count: 1, node: 1 });
        heap.push(HeapEntry { count: 2, node: 2 });

        let popped: Vec<NodeId> = std::iter::from_fn(|| heap.pop()).map(|e| e.node).collect();
        assert_eq!(popped, vec![1, 3, 0, 2]);
    }

    #[test]
    fn node_accessors() {
        let leaf = Node::Leaf {
            symbol: 'a',
            count: 3,
        };
        let parent = Node::Internal {
            count: 5,
            left: 0,
            right: 1,
        };
        assert_eq!(leaf.count(), 3);
        assert_eq!(leaf.symbol(), Some('a'));
        assert_eq!(leaf.children(), None);
        assert!(leaf.is_leaf());
        assert_eq!(parent.count(), 5);
        assert_eq!(parent.symbol(), None);
        assert_eq!(parent.children(), Some((0, 1)));
        assert!(!parent.is_leaf());
    }
}
