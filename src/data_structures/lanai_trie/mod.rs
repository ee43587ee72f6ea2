// Copyright (c) 2025 Lanai Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! This module provides a prefix tree for word completion. Words are inserted
//! incrementally and a prefix query returns every inserted word that starts
//! with it, in depth-first order over children as they were first inserted.
//!
//! Nodes live in an arena and point back to their parent through a plain
//! [`NodeId`], so a completion is rebuilt by walking from its leaf up to the
//! root.

mod arena;
mod config;
mod error;
mod node;

#[cfg(test)]
mod tests;

use tracing::{debug, trace, warn};

use arena::NodeArena;
pub use config::{EmptyWordPolicy, LanaiTrieConfig};
pub use error::{LanaiTrieError, LanaiTrieResult};
pub use node::{Node, NodeId};

/// Outcome of a bulk insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertSummary {
    /// Words that were not present before
    pub inserted: usize,

    /// Words that were already present
    pub duplicates: usize,

    /// Position and error of every word that could not be inserted
    pub rejected: Vec<(usize, LanaiTrieError)>,
}

impl InsertSummary {
    /// Total number of words processed.
    pub fn total(&self) -> usize {
        self.inserted + self.duplicates + self.rejected.len()
    }

    /// Whether every word was accepted.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Lanai Trie is a prefix tree that completes words from a prefix.
///
/// Key features:
/// * Incremental insertion, one word or many at a time
/// * Prefix completion preserving insertion order of branches
/// * Words that are prefixes of other words are reported on their own
/// * Arena storage with non-owning parent links
///
/// The trie has no internal locking. Mutation takes `&mut self`, so sharing it
/// across threads requires the caller to serialize writers.
#[derive(Debug, Clone)]
pub struct LanaiTrie {
    /// Node storage, root at [`NodeId::ROOT`]
    arena: NodeArena,

    /// Configuration options
    config: LanaiTrieConfig,

    /// Number of distinct inserted words
    word_count: usize,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    ///
    /// # Returns
    ///
    /// A new `LanaiTrie` holding only its root node.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            arena: NodeArena::new(),
            config,
            word_count: 0,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Inserts a word into the trie.
    ///
    /// Existing nodes along the word's path are reused and missing ones are
    /// appended. The node for the last character is marked terminal. Terminal
    /// flags are never cleared.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was new, `false` if it was already present.
    /// * `Err(LanaiTrieError)` - If the word is empty under [`EmptyWordPolicy::Reject`]
    ///   or longer than the configured maximum.
    pub fn insert_word<W>(&mut self, word: W) -> LanaiTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return self.insert_empty_word();
        }

        if let Some(max_length) = self.config.max_word_length {
            if word.chars().count() > max_length {
                return Err(LanaiTrieError::WordTooLong {
                    word: word.to_string(),
                    max_length,
                });
            }
        }

        let mut current = NodeId::ROOT;
        let mut is_new = false;
        let mut created = 0usize;
        let mut chars = word.chars().peekable();

        while let Some(character) = chars.next() {
            let is_last = chars.peek().is_none();

            current = match self.arena.child(current, character) {
                Some(existing) => {
                    if is_last {
                        is_new = self.mark_terminal(existing)?;
                    }
                    existing
                }
                None => {
                    created += 1;
                    is_new = is_last;
                    self.arena.push_child(current, character, is_last)
                }
            };
        }

        if is_new {
            self.word_count += 1;
        }

        trace!(word, created, is_new, "Inserted word");
        Ok(is_new)
    }

    fn insert_empty_word(&mut self) -> LanaiTrieResult<bool> {
        match self.config.empty_word {
            EmptyWordPolicy::Reject => Err(LanaiTrieError::EmptyWord),
            EmptyWordPolicy::MarkRoot => {
                let is_new = self.mark_terminal(NodeId::ROOT)?;
                if is_new {
                    self.word_count += 1;
                }
                Ok(is_new)
            }
        }
    }

    /// Sets the terminal flag, returning whether it was previously unset.
    fn mark_terminal(&mut self, id: NodeId) -> LanaiTrieResult<bool> {
        let node = self
            .arena
            .get_mut(id)
            .ok_or(LanaiTrieError::UnknownNode(id))?;
        let was_terminal = node.terminal;
        node.terminal = true;
        Ok(!was_terminal)
    }

    /// Inserts every word in order.
    ///
    /// A rejected word does not stop the remaining ones from being inserted;
    /// its position and error are recorded in the returned summary.
    pub fn insert_words<I, W>(&mut self, words: I) -> InsertSummary
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut summary = InsertSummary::default();

        for (index, word) in words.into_iter().enumerate() {
            match self.insert_word(word) {
                Ok(true) => summary.inserted += 1,
                Ok(false) => summary.duplicates += 1,
                Err(e) => {
                    warn!(index, error = %e, "Skipping word");
                    summary.rejected.push((index, e));
                }
            }
        }

        debug!(
            inserted = summary.inserted,
            duplicates = summary.duplicates,
            rejected = summary.rejected.len(),
            "Bulk insertion finished"
        );
        summary
    }

    /// Resolves `prefix` to the node whose path from the root spells it.
    ///
    /// The empty prefix resolves to the root. Returns `None` as soon as a
    /// character has no matching child.
    pub fn find_node<P>(&self, prefix: P) -> Option<NodeId>
    where
        P: AsRef<str>,
    {
        self.descend(NodeId::ROOT, prefix.as_ref())
    }

    /// Resolves `prefix` relative to `start` instead of the root.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(NodeId))` - The node reached by following `prefix` from `start`.
    /// * `Ok(None)` - If the path does not exist.
    /// * `Err(LanaiTrieError::UnknownNode)` - If `start` was not issued by this trie.
    pub fn find_node_from<P>(&self, start: NodeId, prefix: P) -> LanaiTrieResult<Option<NodeId>>
    where
        P: AsRef<str>,
    {
        self.node_checked(start)?;
        Ok(self.descend(start, prefix.as_ref()))
    }

    fn descend(&self, start: NodeId, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(start, |node, character| self.arena.child(node, character))
    }

    /// Collects the completion leaves below `node`, `node` included.
    ///
    /// A leaf is a childless node or a terminal node. Terminal nodes are
    /// reported before their descendants, and children are visited in
    /// insertion order.
    pub fn collect_leaves(&self, node: NodeId) -> LanaiTrieResult<Vec<NodeId>> {
        self.node_checked(node)?;
        Ok(self.leaves_below(node))
    }

    fn leaves_below(&self, start: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if let Some(node) = self.arena.get(id) {
                if node.is_completion_leaf() {
                    leaves.push(id);
                }
                // Reversed so the first child is popped first
                stack.extend(node.children.iter().rev().copied());
            }
        }

        leaves
    }

    /// Rebuilds the word spelled by the path from the root to `node`.
    pub fn reconstruct_word(&self, node: NodeId) -> LanaiTrieResult<String> {
        self.node_checked(node)?;
        Ok(self.word_at(node))
    }

    fn word_at(&self, node: NodeId) -> String {
        let mut characters = Vec::new();
        let mut cursor = Some(node);

        while let Some(current) = cursor.and_then(|id| self.arena.get(id)) {
            characters.extend(current.character);
            cursor = current.parent;
        }

        characters.into_iter().rev().collect()
    }

    /// Finds all words that begin with `prefix`.
    ///
    /// # Returns
    ///
    /// The completions in depth-first insertion order, or an empty vector if
    /// no inserted word starts with `prefix`.
    pub fn find_words<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let Some(node) = self.find_node(prefix) else {
            trace!(prefix, "Prefix not found");
            return Vec::new();
        };

        let words: Vec<String> = self
            .leaves_below(node)
            .into_iter()
            .filter(|&leaf| leaf != NodeId::ROOT || self.arena.root().terminal)
            .map(|leaf| self.word_at(leaf))
            .collect();

        trace!(prefix, completions = words.len(), "Resolved prefix");
        words
    }

    /// Counts every node in the trie, root included.
    pub fn count_nodes(&self) -> usize {
        self.arena.len()
    }

    /// Counts the nodes in the subtree rooted at `node`, `node` included.
    pub fn count_nodes_from(&self, node: NodeId) -> LanaiTrieResult<usize> {
        self.node_checked(node)?;

        let mut count = 0;
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(current) = self.arena.get(id) {
                count += 1;
                stack.extend_from_slice(&current.children);
            }
        }

        Ok(count)
    }

    /// Checks whether `word` was inserted as a complete word.
    pub fn contains_word<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word)
            .and_then(|id| self.arena.get(id))
            .map_or(false, Node::is_terminal)
    }

    /// Number of distinct words inserted so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether no word has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        self.arena.root()
    }

    /// Returns the node behind `id`, if it belongs to this trie.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    fn node_checked(&self, id: NodeId) -> LanaiTrieResult<&Node> {
        self.arena.get(id).ok_or(LanaiTrieError::UnknownNode(id))
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}
