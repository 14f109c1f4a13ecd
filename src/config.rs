use crate::{
    StructureKind, SuffixArray, SuffixIndex, SuffixTree, SuffixTrie, text::DEFAULT_TERMINAL,
};

/// Configuration for the construction of the suffix structures.
///
/// The free functions [`build_suffix_trie`](crate::build_suffix_trie),
/// [`build_suffix_tree`](crate::build_suffix_tree) and [`build_suffix_array`](crate::build_suffix_array)
/// use the default configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    terminal: u8,
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the terminal symbol that is appended to the text before indexing. Default: `$`.
    ///
    /// The terminal symbol must not occur in the texts that are indexed with this configuration,
    /// construction panics otherwise.
    pub fn terminal(&mut self, terminal: u8) -> &mut Self {
        self.terminal = terminal;
        self
    }

    pub fn construct_suffix_trie(&self, text: &[u8]) -> SuffixTrie {
        SuffixTrie::new(text, self.terminal)
    }

    pub fn construct_suffix_tree(&self, text: &[u8]) -> SuffixTree {
        SuffixTree::new(text, self.terminal)
    }

    pub fn construct_suffix_array<'t>(&self, text: &'t [u8]) -> SuffixArray<'t> {
        SuffixArray::new(text, self.terminal)
    }

    /// Constructs the structure of the given `kind`.
    pub fn construct<'t>(&self, kind: StructureKind, text: &'t [u8]) -> SuffixIndex<'t> {
        match kind {
            StructureKind::Trie => SuffixIndex::Trie(self.construct_suffix_trie(text)),
            StructureKind::Tree => SuffixIndex::Tree(self.construct_suffix_tree(text)),
            StructureKind::Array => SuffixIndex::Array(self.construct_suffix_array(text)),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            terminal: DEFAULT_TERMINAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LongestPrefixMatch;

    #[test]
    fn basic_config() {
        let text = b"GATTACA";

        let index = IndexConfig::new()
            .terminal(b'#')
            .construct(StructureKind::Tree, text);

        assert_eq!(index.kind(), StructureKind::Tree);
        assert_eq!(index.longest_prefix_match(b"TTAG"), 3);
    }

    #[test]
    #[should_panic(expected = "must not occur in the text")]
    fn terminal_collision() {
        IndexConfig::new()
            .terminal(b'A')
            .construct_suffix_trie(b"GATTACA");
    }
}
