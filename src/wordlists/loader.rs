//! Word list parsing utilities
//!
//! Turns a newline-delimited text document into an ordered list of words.

use super::FetchError;
use crate::core::Word;
use tracing::debug;

/// Parse a newline-delimited word list
///
/// Lines are trimmed; blank lines and entries that are not valid five-letter
/// words are skipped. Dictionary order is preserved.
///
/// # Errors
///
/// Returns [`FetchError::EmptyWordList`] if no line holds a valid word.
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("which\nthere\n\ntheir\n").unwrap();
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[1].text(), "there");
/// ```
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, FetchError> {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                skipped += 1;
                debug!(entry = line, %err, "skipping word list entry");
                None
            }
        })
        .collect();

    if words.is_empty() {
        return Err(FetchError::EmptyWordList);
    }
    if skipped > 0 {
        debug!(skipped, kept = words.len(), "word list contained invalid entries");
    }

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["stone", "toolong", "notes"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
