//! One-pass index construction
//!
//! The corpus arrives as an ordered sequence of already-decoded text; no
//! validation is applied. [`build_index`] is the reference single-pass
//! construction; [`build_index_parallel`] splits the corpus into chunks,
//! builds each with the same pass, and merges the partial indexes in corpus
//! order, producing an identical result on more cores.

use super::WordIndex;
use crate::core::Word;
use rayon::prelude::*;

/// Corpus chunk size for the parallel build
const PARALLEL_CHUNK: usize = 1024;

/// Build the word index from a corpus, one word at a time in corpus order
///
/// # Examples
/// ```
/// use ordmask::core::PositionKey;
/// use ordmask::index::build_index;
///
/// let index = build_index(&["bok", "bil", "bal", "katt"]);
/// assert_eq!(index.word_count(), 4);
/// assert_eq!(index.words_of_length(4).len(), 1);
/// assert!(index.words_at(&PositionKey::new('b', 0, 3)).is_some());
/// ```
pub fn build_index<S: AsRef<str>>(corpus: &[S]) -> WordIndex {
    let mut index = WordIndex::default();
    for entry in corpus {
        index.insert(Word::new(entry.as_ref()));
    }
    index
}

/// Build the word index in parallel
///
/// Each word's contribution is independent and the merge is associative, so
/// chunked construction is purely a performance choice: the result is
/// identical to [`build_index`].
pub fn build_index_parallel<S: AsRef<str> + Sync>(corpus: &[S]) -> WordIndex {
    corpus
        .par_chunks(PARALLEL_CHUNK)
        .map(build_index)
        .reduce(WordIndex::default, WordIndex::merge)
}
