//! One-shot query command

use crate::index::WordIndex;
use crate::output::print_candidates;
use crate::resolver::resolve_query;

/// Resolve a single query and print the matching words
///
/// # Errors
///
/// Returns an error if the query is empty. The resolver itself accepts any
/// input, so the empty-input guard lives here at the boundary.
pub fn run_find(index: &WordIndex, raw_query: &str) -> Result<(), String> {
    let raw_query = raw_query.trim();
    if raw_query.is_empty() {
        return Err("the query must not be empty".to_owned());
    }

    let candidates = resolve_query(index, raw_query);
    print_candidates(&candidates);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;

    #[test]
    fn rejects_empty_queries() {
        let index = build_index(&["bok"]);
        assert!(run_find(&index, "").is_err());
        assert!(run_find(&index, "   ").is_err());
    }

    #[test]
    fn accepts_queries_with_no_matches() {
        let index = build_index(&["bok"]);
        assert!(run_find(&index, "z__").is_ok());
    }
}
