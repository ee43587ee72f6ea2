// Copyright (c) 2025 Lanai Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! Nodes are stored in the trie's arena and addressed by [`NodeId`]. Each node
//! holds one character of a word path, its children in insertion order, and a
//! plain index back to its parent.

use std::fmt;

/// Handle to a node stored in a [`LanaiTrie`](super::LanaiTrie).
///
/// A `NodeId` is only meaningful for the trie that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node of every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the arena index backing this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the Lanai Trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Character on the edge leading into this node (`None` for the root)
    pub(crate) character: Option<char>,

    /// Child handles in insertion order
    pub(crate) children: Vec<NodeId>,

    /// Whether a complete word ends at this node
    pub(crate) terminal: bool,

    /// Parent handle (`None` for the root), never an owner
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// Creates the sentinel root node.
    pub(crate) fn root() -> Self {
        Self {
            character: None,
            children: Vec::new(),
            terminal: false,
            parent: None,
        }
    }

    /// Creates a child node hanging off `parent`.
    pub(crate) fn child(character: char, parent: NodeId, terminal: bool) -> Self {
        Self {
            character: Some(character),
            children: Vec::new(),
            terminal,
            parent: Some(parent),
        }
    }

    /// The character this node contributes to a word, `None` for the root.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Children of this node in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether an inserted word ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The parent of this node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether this node has no children.
    pub fn is_childless(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node is reported as a completion leaf.
    ///
    /// A completion leaf is either childless or terminal.
    pub fn is_completion_leaf(&self) -> bool {
        self.is_childless() || self.terminal
    }
}
