//! Query parsing
//!
//! A raw query splits on the first space into a mask token and an optional
//! inclusion token. The mask yields a positional key for every known letter;
//! placeholders consume a position without emitting a key.

use super::key::PositionKey;
use rustc_hash::FxHashSet;

/// Placeholder character marking an unknown letter in a mask
pub const PLACEHOLDER: char = '_';

/// Parsed mask token
///
/// The two variants correspond to the two resolution paths: a mask with no
/// known letters constrains only the word length; everything else carries at
/// least one positional key, with non-emptiness encoded in the variant
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mask {
    /// Every position is a placeholder; only the length is known
    LengthOnly { length: usize },
    /// At least one position carries a known letter
    Positional {
        first: PositionKey,
        rest: Vec<PositionKey>,
    },
}

impl Mask {
    /// Parse a mask token
    ///
    /// Positions advance for every code point, placeholders included, so a
    /// letter after a placeholder keeps its true position. Non-placeholder
    /// characters are taken literally, letters or not.
    ///
    /// # Examples
    /// ```
    /// use ordmask::core::{Mask, PositionKey};
    ///
    /// match Mask::parse("b_l") {
    ///     Mask::Positional { first, rest } => {
    ///         assert_eq!(first, PositionKey::new('b', 0, 3));
    ///         assert_eq!(rest, [PositionKey::new('l', 2, 3)]);
    ///     }
    ///     Mask::LengthOnly { .. } => unreachable!(),
    /// }
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let length = token.chars().count();
        let mut keys = token.chars().enumerate().filter_map(|(position, letter)| {
            (letter != PLACEHOLDER).then_some(PositionKey {
                letter,
                position,
                length,
            })
        });

        match keys.next() {
            None => Self::LengthOnly { length },
            Some(first) => Self::Positional {
                first,
                rest: keys.collect(),
            },
        }
    }

    /// Target word length described by the mask
    #[must_use]
    pub fn length(&self) -> usize {
        match self {
            Self::LengthOnly { length } => *length,
            Self::Positional { first, .. } => first.length,
        }
    }
}

/// A parsed query: mask plus optional inclusion letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    mask: Mask,
    required: Option<FxHashSet<char>>,
}

impl Query {
    /// Parse a raw query string
    ///
    /// The first space-delimited token is the mask; the second, when present,
    /// names letters that must appear somewhere in a candidate (only its
    /// distinct letters matter — repeats carry no meaning). Any further
    /// tokens are ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut tokens = raw.split(' ');
        let mask = Mask::parse(tokens.next().unwrap_or_default());
        let required = tokens.next().map(|token| token.chars().collect());

        Self { mask, required }
    }

    /// The positional half of the query
    #[must_use]
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Letters a candidate must contain, regardless of position
    #[must_use]
    pub fn required(&self) -> Option<&FxHashSet<char>> {
        self.required.as_ref()
    }
}
