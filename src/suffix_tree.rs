use std::ops::Range;

use rustc_hash::FxHashMap;

use crate::LongestPrefixMatch;
use crate::text::{self, longest_common_prefix};

/// A compressed trie of all suffixes of a text, where edges carry multi-symbol labels.
///
/// The nodes are stored in a flat arena and addressed by index, the root is at index 0. Every node except the
/// root stores the label of the edge from its parent as a range into the terminated text owned by the tree.
/// The labels of all children of a node start with pairwise distinct symbols, so a child is selected in O(1)
/// by the first symbol of its label.
///
/// The tree is constructed using [`build_suffix_tree`](crate::build_suffix_tree) or
/// [`IndexConfig::construct_suffix_tree`](crate::IndexConfig::construct_suffix_tree). The construction
/// inserts the suffixes one by one and runs in O(n^2) in the worst case.
#[derive(Debug, Clone)]
pub struct SuffixTree {
    terminated_text: Vec<u8>,
    nodes: Vec<Node>,
}

#[derive(Debug, Clone)]
struct Node {
    label: Range<usize>,
    // keyed by the first symbol of the child's label
    children: FxHashMap<u8, usize>,
}

impl Node {
    fn new(label: Range<usize>) -> Self {
        Self {
            label,
            children: FxHashMap::default(),
        }
    }
}

impl SuffixTree {
    pub(crate) fn new(text: &[u8], terminal: u8) -> Self {
        let mut tree = Self {
            terminated_text: text::terminated(text, terminal),
            nodes: vec![Node::new(0..0)],
        };

        for start in 0..tree.terminated_text.len() {
            tree.insert_suffix(start);
        }

        log::debug!(
            "built suffix tree for text of length {}: {} nodes, {} leaves",
            text.len(),
            tree.num_nodes(),
            tree.num_leaves()
        );

        tree
    }

    // The terminal symbol guarantees that the remaining suffix is never exhausted at a node or inside a label,
    // so the walk always ends by attaching a new leaf.
    fn insert_suffix(&mut self, start: usize) {
        let mut node = 0;
        let mut position = start;

        loop {
            let symbol = self.terminated_text[position];

            let Some(&child) = self.nodes[node].children.get(&symbol) else {
                let leaf = self.push_node(position..self.terminated_text.len());
                self.nodes[node].children.insert(symbol, leaf);
                return;
            };

            let label = self.nodes[child].label.clone();
            let common = longest_common_prefix(
                &self.terminated_text[position..],
                &self.terminated_text[label.clone()],
            );

            if common == label.len() {
                node = child;
                position += common;
                continue;
            }

            // split the edge to child at common
            let split_point = label.start + common;
            let inner = self.push_node(label.start..split_point);
            self.nodes[node].children.insert(symbol, inner);

            self.nodes[child].label = split_point..label.end;
            let child_symbol = self.terminated_text[split_point];
            self.nodes[inner].children.insert(child_symbol, child);

            let leaf = self.push_node(position + common..self.terminated_text.len());
            let leaf_symbol = self.terminated_text[position + common];
            self.nodes[inner].children.insert(leaf_symbol, leaf);

            return;
        }
    }

    fn push_node(&mut self, label: Range<usize>) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node::new(label));
        index
    }

    /// Returns the length of the longest prefix of `pattern` that occurs in the indexed text.
    ///
    /// The running time is in O(m), where m is the length of `pattern`.
    pub fn longest_prefix_match(&self, pattern: &[u8]) -> usize {
        let mut node = 0;
        let mut matched = 0;

        while matched < pattern.len() {
            let Some(&child) = self.nodes[node].children.get(&pattern[matched]) else {
                return matched;
            };

            let label = self.label(child);
            let common = longest_common_prefix(&pattern[matched..], label);

            if common < label.len() {
                return matched + common;
            }

            matched += common;
            node = child;
        }

        pattern.len()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Equals the length of the indexed text plus one, one leaf per suffix including the terminal-only suffix.
    pub fn num_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.children.is_empty())
            .count()
    }

    /// The indexed text including the appended terminal symbol.
    pub fn terminated_text(&self) -> &[u8] {
        &self.terminated_text
    }

    pub(crate) fn root(&self) -> usize {
        0
    }

    pub(crate) fn label(&self, node: usize) -> &[u8] {
        &self.terminated_text[self.nodes[node].label.clone()]
    }

    pub(crate) fn is_leaf(&self, node: usize) -> bool {
        self.nodes[node].children.is_empty()
    }

    pub(crate) fn children(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes[node].children.values().copied()
    }
}

impl LongestPrefixMatch for SuffixTree {
    fn longest_prefix_match(&self, pattern: &[u8]) -> usize {
        SuffixTree::longest_prefix_match(self, pattern)
    }
}
