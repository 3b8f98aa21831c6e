//! Positional index key

/// A letter pinned to a position within words of a fixed length
///
/// Identity is structural equality of the three fields; keys are lookup
/// values and never mutated after construction. Every key actually inserted
/// into an index satisfies `position < length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    /// The known letter
    pub letter: char,
    /// 0-based position of the letter, counted in code points
    pub position: usize,
    /// Length of the containing word, counted in code points
    pub length: usize,
}

impl PositionKey {
    /// Create a new key
    #[must_use]
    pub const fn new(letter: char, position: usize, length: usize) -> Self {
        Self {
            letter,
            position,
            length,
        }
    }
}
