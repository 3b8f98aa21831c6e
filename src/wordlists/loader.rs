//! Word list loading utilities
//!
//! Loads word lists from plain text files (one word per line) or from the
//! JSON string-array format word lists are commonly published in.

use std::fs;
use std::io;
use std::path::Path;

/// Load a corpus from a file
///
/// Paths ending in `.json` are decoded as a JSON array of strings; anything
/// else is read as one word per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or an
/// [`io::ErrorKind::InvalidData`] error if JSON decoding fails.
///
/// # Examples
/// ```no_run
/// use ordmask::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("data/ordlista.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        corpus_from_json(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    } else {
        Ok(corpus_from_lines(&content))
    }
}

/// Split line-oriented text into a corpus, skipping blank lines
#[must_use]
pub fn corpus_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Decode a JSON array of strings into a corpus
///
/// # Errors
///
/// Returns a decode error if the content is not a JSON array of strings.
pub fn corpus_from_json(content: &str) -> serde_json::Result<Vec<String>> {
    serde_json::from_str(content)
}

/// Convert an embedded string slice to an owned corpus
///
/// # Examples
/// ```
/// use ordmask::wordlists::ORDLISTA;
/// use ordmask::wordlists::loader::words_from_slice;
///
/// let corpus = words_from_slice(ORDLISTA);
/// assert_eq!(corpus.len(), ORDLISTA.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&word| word.to_owned()).collect()
}
