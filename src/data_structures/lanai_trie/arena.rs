// Copyright (c) 2025 Lanai Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Flat node storage for the Lanai Trie.
//!
//! The arena owns every node. Children are listed per node in insertion order,
//! and a keyed edge index maps `(parent, character)` to the child so lookups do
//! not scan sibling lists.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

use super::node::{Node, NodeId};

/// Arena of trie nodes addressed by [`NodeId`].
#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
    edges: HashMap<(NodeId, char), NodeId, FnvBuildHasher>,
}

impl NodeArena {
    /// Creates an arena holding only the root node.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            edges: HashMap::with_hasher(FnvBuildHasher::default()),
        }
    }

    /// Number of nodes in the arena, root included.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The root node, which is never removed.
    pub(crate) fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Looks up the child of `parent` labelled `character`.
    pub(crate) fn child(&self, parent: NodeId, character: char) -> Option<NodeId> {
        self.edges.get(&(parent, character)).copied()
    }

    /// Appends a new child under `parent` and returns its handle.
    ///
    /// The caller must have checked that no child with `character` exists yet.
    pub(crate) fn push_child(&mut self, parent: NodeId, character: char, terminal: bool) -> NodeId {
        debug_assert!(self.child(parent, character).is_none());

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::child(character, parent, terminal));
        self.nodes[parent.0].children.push(id);
        self.edges.insert((parent, character), id);
        id
    }
}
