//! The read-only word index
//!
//! Three lookup structures filled in one corpus pass: words keyed by
//! (letter, position, length), per-word letter sets, and words grouped by
//! length in corpus order. Lookups for absent keys return empty results,
//! never errors.

use crate::core::{PositionKey, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Index over a word corpus
///
/// Built once at startup by [`build_index`](super::build_index) and
/// read-only afterwards: queries never mutate it, so concurrent readers need
/// no synchronization.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WordIndex {
    by_position: FxHashMap<PositionKey, FxHashSet<Word>>,
    letter_sets: FxHashMap<Word, FxHashSet<char>>,
    by_length: FxHashMap<usize, Vec<Word>>,
    indexed: usize,
}

impl WordIndex {
    /// Index one word: its length bucket, its letter set, and a positional
    /// key for every letter.
    pub(crate) fn insert(&mut self, word: Word) {
        let length = word.letter_count();
        self.by_length.entry(length).or_default().push(word.clone());

        let mut letters = FxHashSet::default();
        for (position, letter) in word.letters().enumerate() {
            letters.insert(letter);
            let key = PositionKey {
                letter,
                position,
                length,
            };
            self.by_position
                .entry(key)
                .or_default()
                .insert(word.clone());
        }

        // A duplicate corpus entry overwrites with an identical set
        self.letter_sets.insert(word, letters);
        self.indexed += 1;
    }

    /// Merge an index built from a later corpus segment into this one
    ///
    /// Length buckets concatenate in segment order, so merging partial
    /// indexes in corpus order reproduces the sequential build exactly.
    pub(crate) fn merge(mut self, other: Self) -> Self {
        for (key, words) in other.by_position {
            self.by_position.entry(key).or_default().extend(words);
        }
        for (word, letters) in other.letter_sets {
            self.letter_sets.entry(word).or_insert(letters);
        }
        for (length, mut words) in other.by_length {
            self.by_length.entry(length).or_default().append(&mut words);
        }
        self.indexed += other.indexed;
        self
    }

    /// Words of the given length, in corpus order
    ///
    /// Duplicate corpus entries appear once per occurrence. Returns an empty
    /// slice for lengths never seen.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// The set of words carrying the key's letter at the key's position
    #[must_use]
    pub fn words_at(&self, key: &PositionKey) -> Option<&FxHashSet<Word>> {
        self.by_position.get(key)
    }

    /// Whether the word carries the key's letter at the key's position
    #[must_use]
    pub fn contains_at(&self, key: &PositionKey, word: &Word) -> bool {
        self.by_position
            .get(key)
            .is_some_and(|words| words.contains(word))
    }

    /// The distinct letters of an indexed word
    #[must_use]
    pub fn letters_of(&self, word: &Word) -> Option<&FxHashSet<char>> {
        self.letter_sets.get(word)
    }

    /// Whether an indexed word contains the letter anywhere
    #[must_use]
    pub fn word_has_letter(&self, word: &Word, letter: char) -> bool {
        self.letter_sets
            .get(word)
            .is_some_and(|letters| letters.contains(&letter))
    }

    /// Number of corpus entries indexed, duplicates counted
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.indexed
    }

    /// Number of distinct words indexed
    #[must_use]
    pub fn distinct_word_count(&self) -> usize {
        self.letter_sets.len()
    }

    /// Number of distinct positional keys
    #[must_use]
    pub fn position_key_count(&self) -> usize {
        self.by_position.len()
    }

    /// Whether anything was indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexed == 0
    }

    /// (length, word count) pairs, in no particular order
    pub fn length_counts(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.by_length
            .iter()
            .map(|(&length, words)| (length, words.len()))
    }
}
