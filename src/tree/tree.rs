use super::tree_node::{Node, NodeId};
use crate::tree::render_tree::render_plan_to;
use crate::Bits;

/// Huffman tree stored as an arena of nodes.
///
/// Leaves come first, in order of first appearance of their symbol, followed by the parents in
/// the order they were merged. The root is therefore always the last node. A tree built from a
/// single symbol consists of that one leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root_node: NodeId,
}

impl Tree {
    pub fn root(&self) -> NodeId {
        self.root_node
    }
    pub fn get_root_node(&self) -> &Node {
        &self.nodes[self.root_node]
    }
    pub fn get_node(&self, node_pos: NodeId) -> &Node {
        &self.nodes[node_pos]
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// true if the tree consists of a single leaf, i.e. the input had one distinct symbol
    pub fn is_single_leaf(&self) -> bool {
        self.get_root_node().is_leaf()
    }

    pub fn num_symbol_nodes(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }
    pub fn num_internal_nodes(&self) -> usize {
        self.nodes.len() - self.num_symbol_nodes()
    }

    /// length of the longest root to leaf path. 0 for a single leaf.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        self.walk_tree(&mut |_, _, path| {
            max_depth = max_depth.max(path.len());
        });
        max_depth
    }

    /// returns the number of bits needed to encode the counted input with this tree
    pub fn estimate_compressed_bits(&self) -> usize {
        if self.is_single_leaf() {
            return self.get_root_node().count();
        }
        let mut size_in_bits = 0;
        self.walk_tree(&mut |_, node, path| {
            if node.is_leaf() {
                size_in_bits += node.count() * path.len();
            }
        });
        size_in_bits
    }

    /// Depth first walk, left before right. `fun` gets called for every node including the root,
    /// together with the path from the root (0 = left, 1 = right).
    pub fn walk_tree<F>(&self, fun: &mut F)
    where
        F: FnMut(NodeId, &Node, &Bits),
    {
        let mut path = Bits::new();
        self.walk_graph_internal(&mut path, self.root_node, fun);
    }
    fn walk_graph_internal<F>(&self, path: &mut Bits, node_pos: NodeId, fun: &mut F)
    where
        F: FnMut(NodeId, &Node, &Bits),
    {
        let node = &self.nodes[node_pos];
        fun(node_pos, node, path);
        if let Some((left, right)) = node.children() {
            path.push(false);
            self.walk_graph_internal(path, left, fun);
            path.pop();
            path.push(true);
            self.walk_graph_internal(path, right, fun);
            path.pop();
        }
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_plan_to(self, f)
    }
}
