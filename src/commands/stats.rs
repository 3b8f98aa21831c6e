//! Index statistics command

use crate::index::WordIndex;

/// Summary figures for a built index
pub struct IndexStatistics {
    pub total_words: usize,
    pub distinct_words: usize,
    pub position_keys: usize,
    /// Shortest and longest indexed word lengths
    pub length_range: Option<(usize, usize)>,
    /// (length, word count) pairs sorted by length
    pub distribution: Vec<(usize, usize)>,
}

/// Collect statistics from a built index
#[must_use]
pub fn collect_statistics(index: &WordIndex) -> IndexStatistics {
    let mut distribution: Vec<(usize, usize)> = index.length_counts().collect();
    distribution.sort_unstable_by_key(|&(length, _)| length);

    let length_range = match (distribution.first(), distribution.last()) {
        (Some(&(shortest, _)), Some(&(longest, _))) => Some((shortest, longest)),
        _ => None,
    };

    IndexStatistics {
        total_words: index.word_count(),
        distinct_words: index.distinct_word_count(),
        position_keys: index.position_key_count(),
        length_range,
        distribution,
    }
}
