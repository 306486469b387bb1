use std::collections::BinaryHeap;

use common::FrequencyTable;
use log::*;

use crate::tree::tree_node::{HeapEntry, Node};
use crate::tree::Tree;

/// Creates a huffman tree by greedy merging of the two nodes with the lowest counts.
///
/// Returns `None` for an empty table. A table with one distinct symbol yields a tree that is a
/// single leaf, nothing is merged in that case.
///
/// Equal counts are resolved by node id: leaves get their ids in order of first appearance of the
/// symbol, parents are appended in creation order. The first extracted node becomes the left
/// child, so repeated runs over the same table produce the same tree.
pub fn build_tree(counts: &FrequencyTable) -> Option<Tree> {
    if counts.is_empty() {
        return None;
    }

    let mut nodes = Vec::with_capacity(counts.len() * 2 - 1);
    let mut heap = BinaryHeap::with_capacity(counts.len());
    for (symbol, count) in counts.iter() {
        heap.push(HeapEntry {
            count,
            node: nodes.len(),
        });
        nodes.push(Node::Leaf { symbol, count });
    }

    // the root is popped alone and ends the loop
    while let (Some(left), Some(right)) = (heap.pop(), heap.pop()) {
        let count = left.count + right.count;
        trace!(
            "merge N{} ({}) + N{} ({}) -> N{} ({})",
            left.node,
            left.count,
            right.node,
            right.count,
            nodes.len(),
            count
        );
        // add internal Node with aggregated count
        heap.push(HeapEntry {
            count,
            node: nodes.len(),
        });
        nodes.push(Node::Internal {
            count,
            left: left.node,
            right: right.node,
        });
    }

    // last node is the root node
    let root_node = nodes.len() - 1;
    let tree = Tree { nodes, root_node };
    debug!(
        "built tree with {} symbols, root count {}, depth {}",
        counts.len(),
        tree.get_root_node().count(),
        tree.depth()
    );
    Some(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{minimum_tree_depth, NodeId};
    use common::count;
    use std::collections::HashSet;

    fn symbol_depths(tree: &Tree) -> Vec<(char, usize)> {
        let mut depths = vec![];
        tree.walk_tree(&mut |_, node, path| {
            if let Some(symbol) = node.symbol() {
                depths.push((symbol, path.len()));
            }
        });
        depths
    }

    fn validate_tree(tree: &Tree) {
        // check all nodes are connected exactly once
        let mut seen = HashSet::new();
        tree.walk_tree(&mut |id, _, _| {
            assert!(seen.insert(id), "node {} reached twice", id);
        });
        assert_eq!(seen.len(), tree.nodes().len());

        // parents carry the sum of their children, children are never larger than the parent
        for node in tree.nodes() {
            if let Some((left, right)) = node.children() {
                let left = tree.get_node(left);
                let right = tree.get_node(right);
                assert_eq!(node.count(), left.count() + right.count());
                assert!(left.count() <= right.count());
            }
        }
        assert_eq!(tree.root(), tree.nodes().len() - 1);
        assert!(tree.depth() >= minimum_tree_depth(tree.num_symbol_nodes()));
    }

    #[test]
    fn empty_table() {
        assert_eq!(build_tree(&count("")), None);
    }

    #[test]
    fn single_symbol_is_single_leaf() {
        let tree = build_tree(&count("aaaa")).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.nodes().len(), 1);
        assert_eq!(
            *tree.get_root_node(),
            Node::Leaf {
                symbol: 'a',
                count: 4
            }
        );
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.num_internal_nodes(), 0);
        assert_eq!(tree.estimate_compressed_bits(), 4);
    }

    #[test]
    fn two_symbols() {
        let tree = build_tree(&count("aabb")).unwrap();
        validate_tree(&tree);
        assert_eq!(tree.num_internal_nodes(), 1);
        assert_eq!(
            *tree.get_root_node(),
            Node::Internal {
                count: 4,
                left: 0,
                right: 1
            }
        );
        assert_eq!(tree.get_node(0).symbol(), Some('a'));
        assert_eq!(tree.get_node(1).symbol(), Some('b'));
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn ties_follow_first_appearance() {
        // all counts equal, "c" appears first and is extracted first
        let tree = build_tree(&count("cab")).unwrap();
        validate_tree(&tree);
        // merge 1: c + a -> N3 (2), merge 2: b (1) + N3 (2) -> N4
        assert_eq!(
            *tree.get_node(3),
            Node::Internal {
                count: 2,
                left: 0,
                right: 1
            }
        );
        assert_eq!(
            *tree.get_node(4),
            Node::Internal {
                count: 3,
                left: 2,
                right: 3
            }
        );
        assert_eq!(symbol_depths(&tree), vec![('b', 1), ('c', 2), ('a', 2)]);
    }

    #[test]
    fn leaf_wins_tie_against_later_parent() {
        // after merging a + b (2) there are two nodes of count 2: leaf c and the new parent.
        // the leaf has the lower id and goes left.
        let tree = build_tree(&count("abcc")).unwrap();
        let (left, right) = tree.get_root_node().children().unwrap();
        assert_eq!(tree.get_node(left).symbol(), Some('c'));
        assert_eq!(right, 3 as NodeId);
    }

    #[test]
    fn deterministic() {
        let input = "this is a test of the huffman coding algorithm";
        let tree1 = build_tree(&count(input)).unwrap();
        let tree2 = build_tree(&count(input)).unwrap();
        assert_eq!(tree1, tree2);
    }

    #[test]
    fn hello_world() {
        let counts = count("hello world");
        let tree = build_tree(&counts).unwrap();
        validate_tree(&tree);
        assert_eq!(tree.num_symbol_nodes(), counts.len());
        assert_eq!(tree.num_internal_nodes(), counts.len() - 1);
        assert_eq!(tree.get_root_node().count(), 11);
        assert!(tree.estimate_compressed_bits() < 11 * 8);
    }

    // input is the number of repeats per symbol
    fn gen_fibo_distribution(fibo_counts: &[usize]) -> String {
        fibo_counts
            .iter()
            .enumerate()
            .flat_map(|(num, repeat)| {
                std::iter::repeat((b'a' + num as u8) as char).take(*repeat)
            })
            .collect()
    }

    fn test_fibonacci(fibo_counts: &[usize]) {
        let input = gen_fibo_distribution(fibo_counts);
        let tree = build_tree(&count(&input)).unwrap();
        validate_tree(&tree);

        // in the fibonacci case the biggest symbol count should be directly under the root node
        let (left, _) = tree.get_root_node().children().unwrap();
        let last_symbol = (b'a' + fibo_counts.len() as u8 - 1) as char;
        assert_eq!(tree.get_node(left).symbol(), Some(last_symbol));
        assert_eq!(tree.depth(), fibo_counts.len() - 1);
    }

    #[test]
    fn long_tree_distribution() {
        test_fibonacci(&[1, 1, 2, 3]);
        test_fibonacci(&[1, 1, 2, 3, 5]);
        test_fibonacci(&[1, 1, 2, 3, 5, 8]);
        test_fibonacci(&[1, 1, 2, 3, 5, 8, 13]);
        test_fibonacci(&[1, 1, 2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn balanced_tree_distribution() {
        let input: String = ('a'..='p').collect();
        let tree = build_tree(&count(&input)).unwrap();
        validate_tree(&tree);
        assert_eq!(tree.depth(), minimum_tree_depth(16));
        assert!(symbol_depths(&tree).iter().all(|(_, depth)| *depth == 4));
    }
}
