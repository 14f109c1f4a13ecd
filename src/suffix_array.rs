use crate::LongestPrefixMatch;
use crate::suffix_tree::SuffixTree;
use crate::text::longest_common_prefix;

/// The suffix array of a text, together with a reference to the text it was built for.
///
/// The offsets are sorted such that `text[offsets[i]..] < text[offsets[i + 1]..]`. The suffix array is derived
/// from a [`SuffixTree`] that is built as a scaffold and dropped afterwards.
#[derive(Debug, Clone)]
pub struct SuffixArray<'t> {
    text: &'t [u8],
    offsets: Vec<usize>,
}

impl<'t> SuffixArray<'t> {
    pub(crate) fn new(text: &'t [u8], terminal: u8) -> Self {
        let tree = SuffixTree::new(text, terminal);
        let offsets = offsets_from_suffix_tree(&tree, text);

        log::debug!(
            "built suffix array for text of length {} from suffix tree with {} nodes",
            text.len(),
            tree.num_nodes()
        );

        Self { text, offsets }
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn into_offsets(self) -> Vec<usize> {
        self.offsets
    }

    /// See [`search`].
    pub fn longest_prefix_match(&self, pattern: &[u8]) -> usize {
        search(self.text, &self.offsets, pattern)
    }
}

impl LongestPrefixMatch for SuffixArray<'_> {
    fn longest_prefix_match(&self, pattern: &[u8]) -> usize {
        SuffixArray::longest_prefix_match(self, pattern)
    }
}

// The tree indexes the terminated text, so the string depth of a leaf is measured against the terminated
// length. The leaf of the terminal-only suffix maps to offset text.len() and is not part of the array.
fn offsets_from_suffix_tree(tree: &SuffixTree, text: &[u8]) -> Vec<usize> {
    let terminated_len = tree.terminated_text().len();

    let mut offsets = Vec::with_capacity(text.len());
    let mut stack = vec![(tree.root(), 0)];

    while let Some((node, depth)) = stack.pop() {
        if tree.is_leaf(node) {
            let offset = terminated_len - depth;

            if offset < text.len() {
                offsets.push(offset);
            }
        }

        for child in tree.children(node) {
            stack.push((child, depth + tree.label(child).len()));
        }
    }

    offsets.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));

    offsets
}

/// Returns the length of the longest prefix of `pattern` among the suffixes probed by a binary search over
/// `suffix_array`.
///
/// The search steers by comparing the first mismatching symbols of the probed suffix and `pattern` and keeps
/// the best match length seen so far. Only O(log n) suffixes are inspected, the result is never larger than
/// `pattern.len()` and it is not an exhaustive maximum over all suffixes. When `suffix_array` is
/// lexicographically sorted, the suffixes directly before and after the position of `pattern` are always probed,
/// which are the suffixes sharing the longest prefix with it. For any other order of offsets, the result can be
/// smaller than the true longest prefix match.
///
/// The running time is in O(m log n), where m is the length of `pattern`.
pub fn search(text: &[u8], suffix_array: &[usize], pattern: &[u8]) -> usize {
    let mut lo = 0;
    let mut hi = suffix_array.len();
    let mut best = 0;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let suffix = &text[suffix_array[mid]..];
        let matched = longest_common_prefix(suffix, pattern);

        let suffix_is_greater = matched == pattern.len()
            || suffix
                .get(matched)
                .is_some_and(|&symbol| symbol > pattern[matched]);

        if suffix_is_greater {
            hi = mid;
        } else {
            lo = mid + 1;
        }

        best = best.max(matched);
    }

    best
}
