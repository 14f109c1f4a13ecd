use rustc_hash::FxHashMap;

use crate::LongestPrefixMatch;
use crate::text;

/// An uncompressed trie of all suffixes of a text.
///
/// Every edge consumes exactly one symbol, so the number of nodes is quadratic in the text length
/// in the worst case. Each root-to-leaf path spells one suffix of the text followed by the terminal symbol.
///
/// The trie is constructed using [`build_suffix_trie`](crate::build_suffix_trie) or
/// [`IndexConfig::construct_suffix_trie`](crate::IndexConfig::construct_suffix_trie).
#[derive(Debug, Clone)]
pub struct SuffixTrie {
    // the root is at index 0
    nodes: Vec<TrieNode>,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: FxHashMap<u8, usize>,
}

impl SuffixTrie {
    pub(crate) fn new(text: &[u8], terminal: u8) -> Self {
        let terminated = text::terminated(text, terminal);

        let mut trie = Self {
            nodes: vec![TrieNode::default()],
        };

        for start in 0..terminated.len() {
            trie.insert_suffix(&terminated[start..]);
        }

        log::debug!(
            "built suffix trie for text of length {}: {} nodes, {} leaves",
            text.len(),
            trie.num_nodes(),
            trie.num_leaves()
        );

        trie
    }

    fn insert_suffix(&mut self, suffix: &[u8]) {
        let mut node = 0;

        for &symbol in suffix {
            node = self.child_or_insert(node, symbol);
        }
    }

    fn child_or_insert(&mut self, node: usize, symbol: u8) -> usize {
        if let Some(&child) = self.nodes[node].children.get(&symbol) {
            return child;
        }

        let child = self.nodes.len();
        self.nodes.push(TrieNode::default());
        self.nodes[node].children.insert(symbol, child);

        child
    }

    /// Returns the length of the longest prefix of `pattern` that occurs in the indexed text.
    ///
    /// The running time is in O(m), where m is the length of `pattern`.
    pub fn longest_prefix_match(&self, pattern: &[u8]) -> usize {
        let mut node = 0;

        for (matched, symbol) in pattern.iter().enumerate() {
            match self.nodes[node].children.get(symbol) {
                Some(&child) => node = child,
                None => return matched,
            }
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
}

impl LongestPrefixMatch for SuffixTrie {
    fn longest_prefix_match(&self, pattern: &[u8]) -> usize {
        SuffixTrie::longest_prefix_match(self, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banana() {
        let trie = SuffixTrie::new(b"banana", b'$');

        assert_eq!(trie.longest_prefix_match(b"ana"), 3);
        assert_eq!(trie.longest_prefix_match(b"xyz"), 0);
        assert_eq!(trie.longest_prefix_match(b"nab"), 2);
        assert_eq!(trie.longest_prefix_match(b"banana$"), 7);
        assert_eq!(trie.num_leaves(), 7);
    }

    #[test]
    fn node_count() {
        // root, then "A", "AA", "AA$", "A$" and "$"
        let trie = SuffixTrie::new(b"AA", b'$');

        assert_eq!(trie.num_nodes(), 6);
        assert_eq!(trie.num_leaves(), 3);
        assert_eq!(trie.longest_prefix_match(b"AA"), 2);
        assert_eq!(trie.longest_prefix_match(b"AAA"), 2);
    }

    #[test]
    fn empty_text() {
        let trie = SuffixTrie::new(b"", b'$');

        assert_eq!(trie.num_nodes(), 2);
        assert_eq!(trie.longest_prefix_match(b"$"), 1);
        assert_eq!(trie.longest_prefix_match(b"A"), 0);
        assert_eq!(trie.longest_prefix_match(b""), 0);
    }
}
