//! Word representation
//!
//! A word is an immutable sequence of letters compared exactly as it appears
//! in the corpus. Lengths and positions count Unicode code points, not bytes.

use std::fmt;
use std::sync::Arc;

/// A dictionary word
///
/// Backed by a shared immutable string so the same word can sit in several
/// index structures without copying its text. No validation or normalization
/// is applied: empty words, duplicates, and mixed-case words are stored
/// as-is, and comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Arc<str>);

impl Word {
    /// Create a new Word from text
    ///
    /// # Examples
    /// ```
    /// use ordmask::core::Word;
    ///
    /// let word = Word::new("katt");
    /// assert_eq!(word.text(), "katt");
    /// assert_eq!(word.letter_count(), 4);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of letters, counting Unicode code points
    ///
    /// A multi-byte letter counts as one position:
    /// ```
    /// use ordmask::core::Word;
    ///
    /// assert_eq!(Word::new("sjö").letter_count(), 3);
    /// assert_eq!(Word::new("sjö").text().len(), 4);
    /// ```
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Iterate the word's letters left to right
    #[inline]
    pub fn letters(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation() {
        let word = Word::new("katt");
        assert_eq!(word.text(), "katt");
        assert_eq!(word.letter_count(), 4);
    }

    #[test]
    fn word_accepts_anything() {
        // The corpus is taken as-is: empty, mixed case, non-letters
        assert_eq!(Word::new("").letter_count(), 0);
        assert_eq!(Word::new("a-b").letter_count(), 3);
        assert_eq!(Word::new("Katt").text(), "Katt");
    }

    #[test]
    fn word_length_counts_code_points() {
        let word = Word::new("blåbär");
        assert_eq!(word.letter_count(), 6);
        assert_eq!(word.text().len(), 8); // two 2-byte letters
    }

    #[test]
    fn word_is_case_sensitive() {
        assert_ne!(Word::new("bok"), Word::new("Bok"));
        assert_eq!(Word::new("bok"), Word::new("bok"));
    }

    #[test]
    fn word_letters_in_order() {
        let letters: Vec<char> = Word::new("sjö").letters().collect();
        assert_eq!(letters, ['s', 'j', 'ö']);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![Word::new("bok"), Word::new("bal"), Word::new("bil")];
        words.sort_unstable();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["bal", "bil", "bok"]);
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", Word::new("örn")), "örn");
    }
}
