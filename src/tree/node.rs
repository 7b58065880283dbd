//! Node arena produced by the tree builder

use crate::condition::Condition;
use ahash::AHashMap;

/// Node identifier, unique across the whole tree
pub type NodeId = u32;

/// A tree node: a decision point or a terminal value
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Internal {
        condition: Condition,
        yes: NodeId,
        no: NodeId,
    },
    Leaf {
        value: f64,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A fully built, validated binary tree
///
/// Only [`TreeBuilder::finish`](crate::tree::TreeBuilder::finish) creates one, so
/// every child reference resolves and every node except the root has exactly
/// one parent. The tree is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Tree {
    root: NodeId,
    nodes: AHashMap<NodeId, Node>,
    leaf_count: usize,
}

impl Tree {
    pub(crate) fn from_parts(root: NodeId, nodes: AHashMap<NodeId, Node>, leaf_count: usize) -> Self {
        Self {
            root,
            nodes,
            leaf_count,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Nodes in arbitrary order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }
}
