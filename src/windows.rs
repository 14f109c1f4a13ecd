//! Indexing of long texts in independent, fixed-size windows.
//!
//! Windows share no state, so every window is built and queried in parallel. The number of threads is
//! controlled by rayon.

use rayon::prelude::*;

use crate::{IndexConfig, LongestPrefixMatch, StructureKind};

/// The longest prefix matches of all patterns within one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowMatches {
    /// Position of the first symbol of the window in the full text.
    pub start: usize,
    /// One match length per pattern, in the order of the patterns.
    pub matches: Vec<usize>,
}

/// Splits `text` into consecutive windows of `window_size` symbols and searches every pattern in every window.
///
/// The last window is shorter if `window_size` does not divide the text length. Matches never span a window
/// border. The results are returned in the order of the windows.
pub fn longest_prefix_matches_per_window<P: AsRef<[u8]> + Sync>(
    text: &[u8],
    window_size: usize,
    kind: StructureKind,
    config: &IndexConfig,
    patterns: &[P],
) -> Vec<WindowMatches> {
    assert!(window_size > 0, "The window size must be positive");

    text.par_chunks(window_size)
        .enumerate()
        .map(|(window_index, window)| {
            let index = config.construct(kind, window);

            let matches = patterns
                .iter()
                .map(|pattern| index.longest_prefix_match(pattern.as_ref()))
                .collect();

            WindowMatches {
                start: window_index * window_size,
                matches,
            }
        })
        .collect()
}

/// The best match length of every pattern over all windows of `text`.
pub fn best_prefix_matches<P: AsRef<[u8]> + Sync>(
    text: &[u8],
    window_size: usize,
    kind: StructureKind,
    config: &IndexConfig,
    patterns: &[P],
) -> Vec<usize> {
    longest_prefix_matches_per_window(text, window_size, kind, config, patterns)
        .into_iter()
        .fold(vec![0; patterns.len()], |mut best, window_matches| {
            for (b, m) in best.iter_mut().zip(window_matches.matches) {
                *b = (*b).max(m);
            }
            best
        })
}
