/*!
Suffix trie, suffix tree and suffix array construction with longest prefix search.

All three structures index a text, for example a window of a genomic sequence, and answer the same question:
what is the longest prefix of a query pattern that occurs in the text? A pattern occurs in the text exactly when
its longest prefix match is the whole pattern.

```
let text = b"AGTCCAG";

let trie = suffixdex::build_suffix_trie(text);
let tree = suffixdex::build_suffix_tree(text);
let suffix_array = suffixdex::build_suffix_array(text);

assert_eq!(suffixdex::search_trie(&trie, b"AGT"), 3);
assert_eq!(suffixdex::search_tree(&tree, b"AGA"), 2);
assert_eq!(suffixdex::search_array(text, &suffix_array, b"CCA"), 3);
```

The structures are built naively by inserting one suffix after the other. The suffix trie uses O(n^2) nodes
and is only practical for small texts. Long sequences can be split into windows that are indexed
independently, see [`windows`].
*/

pub mod config;
pub mod suffix_array;
pub mod suffix_tree;
pub mod suffix_trie;
pub mod text;
pub mod windows;

#[cfg(feature = "cli")]
pub mod cli;

#[doc(inline)]
pub use config::IndexConfig;
#[doc(inline)]
pub use suffix_array::SuffixArray;
#[doc(inline)]
pub use suffix_tree::SuffixTree;
#[doc(inline)]
pub use suffix_trie::SuffixTrie;

use std::fmt;

/// Builds the suffix trie of `text` with the default terminal symbol `$`.
pub fn build_suffix_trie(text: &[u8]) -> SuffixTrie {
    IndexConfig::default().construct_suffix_trie(text)
}

/// Returns the length of the longest prefix of `pattern` that occurs in the text indexed by `trie`.
pub fn search_trie(trie: &SuffixTrie, pattern: &[u8]) -> usize {
    trie.longest_prefix_match(pattern)
}

/// Builds the suffix tree of `text` with the default terminal symbol `$`.
pub fn build_suffix_tree(text: &[u8]) -> SuffixTree {
    IndexConfig::default().construct_suffix_tree(text)
}

/// Returns the length of the longest prefix of `pattern` that occurs in the text indexed by `tree`.
pub fn search_tree(tree: &SuffixTree, pattern: &[u8]) -> usize {
    tree.longest_prefix_match(pattern)
}

/// Builds the suffix array of `text`, a permutation of `0..text.len()` in lexicographic order of the suffixes.
///
/// A suffix tree with the default terminal symbol `$` is built internally and discarded.
pub fn build_suffix_array(text: &[u8]) -> Vec<usize> {
    IndexConfig::default()
        .construct_suffix_array(text)
        .into_offsets()
}

/// Binary search for `pattern` in the `suffix_array` of `text`.
///
/// The result is the best prefix match among the probed suffixes, see [`suffix_array::search`] for the
/// guarantees of this search.
pub fn search_array(text: &[u8], suffix_array: &[usize], pattern: &[u8]) -> usize {
    suffix_array::search(text, suffix_array, pattern)
}

/// The search operation shared by all structures of this library.
pub trait LongestPrefixMatch {
    /// Returns the length of the longest prefix of `pattern` found in the indexed text.
    ///
    /// The result is always in `[0, pattern.len()]`.
    fn longest_prefix_match(&self, pattern: &[u8]) -> usize;
}

/// The three kinds of suffix structures.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum, serde::Serialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StructureKind {
    Trie,
    Tree,
    Array,
}

impl StructureKind {
    pub const ALL: [StructureKind; 3] = [
        StructureKind::Trie,
        StructureKind::Tree,
        StructureKind::Array,
    ];
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructureKind::Trie => "SuffixTrie",
            StructureKind::Tree => "SuffixTree",
            StructureKind::Array => "SuffixArray",
        };

        f.pad(name)
    }
}

/// One built suffix structure of any kind.
#[derive(Debug, Clone)]
pub enum SuffixIndex<'t> {
    Trie(SuffixTrie),
    Tree(SuffixTree),
    Array(SuffixArray<'t>),
}

impl SuffixIndex<'_> {
    pub fn kind(&self) -> StructureKind {
        match self {
            SuffixIndex::Trie(_) => StructureKind::Trie,
            SuffixIndex::Tree(_) => StructureKind::Tree,
            SuffixIndex::Array(_) => StructureKind::Array,
        }
    }
}

impl LongestPrefixMatch for SuffixIndex<'_> {
    fn longest_prefix_match(&self, pattern: &[u8]) -> usize {
        match self {
            SuffixIndex::Trie(trie) => trie.longest_prefix_match(pattern),
            SuffixIndex::Tree(tree) => tree.longest_prefix_match(pattern),
            SuffixIndex::Array(suffix_array) => suffix_array.longest_prefix_match(pattern),
        }
    }
}
