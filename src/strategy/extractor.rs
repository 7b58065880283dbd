//! Lazy root-to-leaf path enumeration

use crate::config::ExtractOptions;
use crate::strategy::model::{Strategy, Term};
use crate::tree::{Node, NodeId, Tree};
use log::debug;
use std::iter::FusedIterator;

/// Depth-first, yes-before-no iterator over the strategies of a tree
///
/// Holds only the current path and the pending siblings along it, so memory
/// grows with tree depth, not tree size.
#[derive(Debug, Clone)]
pub struct Strategies<'a> {
    tree: &'a Tree,
    path: Vec<Term<'a>>,
    pending: Vec<Pending<'a>>,
}

#[derive(Debug, Clone)]
struct Pending<'a> {
    node: NodeId,
    /// Path length at the parent
    depth: usize,
    term: Option<Term<'a>>,
}

impl<'a> Strategies<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            path: Vec::new(),
            pending: vec![Pending {
                node: tree.root(),
                depth: 0,
                term: None,
            }],
        }
    }
}

impl<'a> Iterator for Strategies<'a> {
    type Item = Strategy<'a>;

    fn next(&mut self) -> Option<Strategy<'a>> {
        let tree = self.tree;

        while let Some(Pending { node, depth, term }) = self.pending.pop() {
            self.path.truncate(depth);
            if let Some(term) = term {
                self.path.push(term);
            }

            match tree.get(node) {
                Some(Node::Leaf { value }) => {
                    return Some(Strategy {
                        leaf: node,
                        terms: self.path.clone(),
                        value: *value,
                    });
                }
                Some(Node::Internal { condition, yes, no }) => {
                    let depth = self.path.len();
                    self.pending.push(Pending {
                        node: *no,
                        depth,
                        term: Some(Term::No(condition)),
                    });
                    self.pending.push(Pending {
                        node: *yes,
                        depth,
                        term: Some(Term::Yes(condition)),
                    });
                }
                None => {}
            }
        }

        None
    }
}

impl FusedIterator for Strategies<'_> {}

impl Tree {
    /// Enumerate one strategy per leaf; every call starts a fresh walk
    pub fn strategies(&self) -> Strategies<'_> {
        Strategies::new(self)
    }
}

/// Enumerate strategies, applying the extraction options
pub fn extract<'a>(tree: &'a Tree, options: &ExtractOptions) -> impl Iterator<Item = Strategy<'a>> + 'a {
    let skip_unsatisfiable = options.skip_unsatisfiable;

    tree.strategies().filter(move |strategy| {
        if skip_unsatisfiable && !strategy.is_satisfiable() {
            debug!("Skipping always false strategy for leaf {}: {}", strategy.leaf, strategy);
            return false;
        }
        true
    })
}
