//! Query resolution
//!
//! Resolves a parsed [`Query`] against a [`WordIndex`]. A mask with no known
//! letters falls back to the by-length list in corpus order; a mask with
//! positional keys seeds candidates from the first key's set and keeps only
//! members of every remaining key's set, then sorts the survivors. The
//! optional inclusion letters filter either branch by letter presence alone.
//!
//! The two branches deliberately differ in ordering: the positional branch
//! sorts lexicographically while the all-placeholder branch reports corpus
//! order, duplicates included. This asymmetry is inherited behavior, kept
//! intact and pinned by regression tests rather than harmonized.

use crate::core::{Mask, Query, Word};
use crate::index::WordIndex;
use rustc_hash::FxHashSet;

/// Resolve a raw query string against the index
///
/// The caller is expected to reject empty input before calling; the resolver
/// itself accepts any string and reports zero matches as an empty list, never
/// as an error.
///
/// # Examples
/// ```
/// use ordmask::index::build_index;
/// use ordmask::resolver::resolve_query;
///
/// let index = build_index(&["bok", "bil", "bal", "katt"]);
/// assert_eq!(resolve_query(&index, "b_l"), ["bal", "bil"]);
/// assert_eq!(resolve_query(&index, "____ a"), ["katt"]);
/// ```
pub fn resolve_query<'a>(index: &'a WordIndex, raw_query: &str) -> Vec<&'a str> {
    resolve(index, &Query::parse(raw_query))
}

/// Resolve a parsed query against the index
pub fn resolve<'a>(index: &'a WordIndex, query: &Query) -> Vec<&'a str> {
    match query.mask() {
        Mask::LengthOnly { length } => index
            .words_of_length(*length)
            .iter()
            .filter(|&word| contains_required(index, word, query.required()))
            .map(Word::text)
            .collect(),
        Mask::Positional { first, rest } => {
            let mut matches: Vec<&Word> = index
                .words_at(first)
                .into_iter()
                .flatten()
                .filter(|&word| rest.iter().all(|key| index.contains_at(key, word)))
                .filter(|&word| contains_required(index, word, query.required()))
                .collect();
            matches.sort_unstable();
            matches.into_iter().map(Word::text).collect()
        }
    }
}

/// Letter-presence check for the inclusion constraint
///
/// Each required letter must appear somewhere in the word; multiplicity is
/// irrelevant.
fn contains_required(
    index: &WordIndex,
    word: &Word,
    required: Option<&FxHashSet<char>>,
) -> bool {
    required.is_none_or(|letters| {
        letters
            .iter()
            .all(|&letter| index.word_has_letter(word, letter))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;

    fn scenario_index() -> WordIndex {
        build_index(&["bok", "bil", "bal", "katt"])
    }

    #[test]
    fn leading_letter_mask() {
        let index = scenario_index();
        assert_eq!(resolve_query(&index, "b__"), ["bal", "bil", "bok"]);
    }

    #[test]
    fn two_key_intersection() {
        let index = scenario_index();
        assert_eq!(resolve_query(&index, "b_l"), ["bal", "bil"]);
    }

    #[test]
    fn all_placeholders_with_inclusion() {
        let index = scenario_index();
        assert_eq!(resolve_query(&index, "____ a"), ["katt"]);
    }

    #[test]
    fn repeated_letter_keys() {
        let index = scenario_index();
        assert_eq!(resolve_query(&index, "k_tt"), ["katt"]);
    }

    #[test]
    fn unseen_key_yields_empty_result() {
        let index = scenario_index();
        assert!(resolve_query(&index, "z__").is_empty());
    }

    #[test]
    fn fully_concrete_mask_finds_the_word_itself() {
        let index = scenario_index();
        assert_eq!(resolve_query(&index, "katt"), ["katt"]);
        assert_eq!(resolve_query(&index, "bok"), ["bok"]);
    }

    #[test]
    fn single_key_returns_whole_seed_pool_sorted() {
        let index = scenario_index();
        assert_eq!(resolve_query(&index, "_o_"), ["bok"]);
        assert_eq!(resolve_query(&index, "__l"), ["bal", "bil"]);
    }

    #[test]
    fn resolution_is_idempotent() {
        let index = scenario_index();
        assert_eq!(resolve_query(&index, "b__"), resolve_query(&index, "b__"));
        assert_eq!(resolve_query(&index, "___"), resolve_query(&index, "___"));
    }

    #[test]
    fn positional_branch_sorts_lexicographically() {
        let index = build_index(&["tre", "ton", "tak", "tur"]);
        let result = resolve_query(&index, "t__");
        assert_eq!(result, ["tak", "ton", "tre", "tur"]);
        assert!(result.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // Inherited quirk: the all-placeholder branch reports corpus order and
    // never sorts, unlike the positional branch.
    #[test]
    fn all_placeholder_branch_preserves_insertion_order() {
        let index = build_index(&["tre", "två", "ett"]);
        assert_eq!(resolve_query(&index, "___"), ["tre", "två", "ett"]);
    }

    #[test]
    fn all_placeholder_branch_keeps_insertion_order_when_filtered() {
        let index = build_index(&["sol", "sal", "ros", "byt"]);
        assert_eq!(resolve_query(&index, "___ s"), ["sol", "sal", "ros"]);
    }

    #[test]
    fn all_placeholder_branch_keeps_duplicates() {
        let index = build_index(&["bok", "bok"]);
        assert_eq!(resolve_query(&index, "___"), ["bok", "bok"]);
    }

    #[test]
    fn positional_branch_deduplicates() {
        let index = build_index(&["bok", "bok"]);
        assert_eq!(resolve_query(&index, "b__"), ["bok"]);
    }

    #[test]
    fn inclusion_is_presence_only() {
        // A single 'a' satisfies a doubled inclusion token
        let index = scenario_index();
        assert_eq!(resolve_query(&index, "____ aa"), ["katt"]);
        assert_eq!(resolve_query(&index, "k___ tt"), ["katt"]);
    }

    #[test]
    fn inclusion_requires_every_distinct_letter() {
        let index = scenario_index();
        assert_eq!(resolve_query(&index, "b__ ok"), ["bok"]);
        assert!(resolve_query(&index, "b__ oz").is_empty());
    }

    #[test]
    fn absent_length_is_empty_even_with_inclusion() {
        let index = scenario_index();
        assert!(resolve_query(&index, "______").is_empty());
        assert!(resolve_query(&index, "______ a").is_empty());
    }

    #[test]
    fn masks_count_code_points_not_bytes() {
        let index = build_index(&["lås", "läs", "lus"]);
        // 'å' and 'ä' are two bytes but one position each
        assert_eq!(resolve_query(&index, "l_s"), ["lus", "läs", "lås"]);
        assert_eq!(resolve_query(&index, "lå_"), ["lås"]);
    }

    #[test]
    fn letters_match_case_sensitively() {
        let index = build_index(&["Bok", "bok"]);
        assert_eq!(resolve_query(&index, "B__"), ["Bok"]);
        assert_eq!(resolve_query(&index, "b__"), ["bok"]);
    }

    #[test]
    fn non_letter_mask_characters_match_literally() {
        let index = build_index(&["a-b", "axb"]);
        assert_eq!(resolve_query(&index, "a-b"), ["a-b"]);
        assert_eq!(resolve_query(&index, "a_b"), ["a-b", "axb"]);
    }

    #[test]
    fn empty_inclusion_token_filters_nothing() {
        let index = scenario_index();
        assert_eq!(resolve_query(&index, "b__ "), ["bal", "bil", "bok"]);
    }

    #[test]
    fn resolve_accepts_parsed_queries() {
        let index = scenario_index();
        let query = Query::parse("b_l");
        assert_eq!(resolve(&index, &query), ["bal", "bil"]);
    }
}
