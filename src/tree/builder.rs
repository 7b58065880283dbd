//! Depth-driven tree reconstruction
//!
//! Lines arrive in source order. Indentation says which open ancestor a node
//! hangs under; the `yes=`/`no=` ids say the same thing a second time. The
//! builder records both and only hands out a [`Tree`] once they agree.

use crate::error::{Result, StructuralError, TreeStrategiesError};
use crate::tree::line::ParsedLine;
use crate::tree::node::{Node, NodeId, Tree};
use ahash::AHashMap;
use log::debug;

/// Accumulates parsed lines, then validates them into a [`Tree`]
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: AHashMap<NodeId, Node>,
    /// Source line of every registered node
    lines: AHashMap<NodeId, usize>,
    /// Parent implied by indentation; absent for the root
    indent_parents: AHashMap<NodeId, NodeId>,
    /// Registration order, used to report errors deterministically
    order: Vec<(NodeId, usize)>,
    /// Open ancestors as (depth, id), depths strictly increasing by one
    open: Vec<(usize, NodeId)>,
    root: Option<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the next line in source order
    pub fn push(&mut self, record: ParsedLine) -> Result<()> {
        let ParsedLine {
            line,
            depth,
            id,
            node,
        } = record;

        while matches!(self.open.last(), Some(&(open_depth, _)) if open_depth >= depth) {
            self.open.pop();
        }

        let parent = if depth == 0 {
            if self.root.is_some() {
                return Err(StructuralError::MultipleRoots { id, line }.into());
            }
            None
        } else {
            match self.open.last() {
                Some(&(open_depth, parent)) if open_depth + 1 == depth => Some(parent),
                _ => return Err(StructuralError::OrphanNode { id, line, depth }.into()),
            }
        };

        if let Some(parent) = parent {
            if matches!(self.nodes.get(&parent), Some(Node::Leaf { .. })) {
                return Err(StructuralError::ChildOfLeaf {
                    id,
                    line,
                    leaf: parent,
                }
                .into());
            }
        }

        if let Some(&first_line) = self.lines.get(&id) {
            return Err(StructuralError::DuplicateId {
                id,
                line,
                first_line,
            }
            .into());
        }

        match parent {
            Some(parent) => {
                self.indent_parents.insert(id, parent);
            }
            None => self.root = Some(id),
        }
        self.nodes.insert(id, node);
        self.lines.insert(id, line);
        self.order.push((id, line));
        self.open.push((depth, id));

        Ok(())
    }

    /// Check the cross-line invariants and freeze the tree
    pub fn finish(self) -> Result<Tree> {
        let root = self.root.ok_or(TreeStrategiesError::EmptyInput)?;

        let mut referenced_by: AHashMap<NodeId, NodeId> = AHashMap::with_capacity(self.nodes.len());
        let mut leaf_count = 0;

        for &(id, line) in &self.order {
            match self.nodes.get(&id) {
                Some(Node::Internal { yes, no, .. }) => {
                    for child in [*yes, *no] {
                        if !self.nodes.contains_key(&child) {
                            return Err(StructuralError::DanglingChild {
                                parent: id,
                                child,
                                line,
                            }
                            .into());
                        }
                        if let Some(&first_parent) = referenced_by.get(&child) {
                            return Err(StructuralError::SharedChild {
                                child,
                                first_parent,
                                second_parent: id,
                            }
                            .into());
                        }
                        referenced_by.insert(child, id);
                    }
                }
                Some(Node::Leaf { .. }) => leaf_count += 1,
                None => {}
            }
        }

        for &(id, line) in &self.order {
            let indented_under = self.indent_parents.get(&id).copied();
            let referenced = referenced_by.get(&id).copied();
            if indented_under != referenced {
                return Err(StructuralError::IndentationMismatch {
                    id,
                    line,
                    indented_under,
                    referenced_by: referenced,
                }
                .into());
            }
        }

        debug!(
            "Built tree rooted at {} with {} nodes ({} leaves)",
            root,
            self.nodes.len(),
            leaf_count
        );

        Ok(Tree::from_parts(root, self.nodes, leaf_count))
    }
}
