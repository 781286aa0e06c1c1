//! Formatting utilities for terminal output

use crate::core::WORD_LENGTH;

/// Placeholder for an unknown position
pub const UNKNOWN_SLOT: char = '_';

/// Format green slots as `A _ _ E _`
#[must_use]
pub fn green_pattern(green: &[Option<u8>; WORD_LENGTH]) -> String {
    green
        .iter()
        .map(|slot| slot.map_or(UNKNOWN_SLOT, |b| char::from(b.to_ascii_uppercase())))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a letter set in uppercase, e.g. for field display
#[must_use]
pub fn upper_letters(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|b| char::from(b.to_ascii_uppercase()))
        .collect()
}

/// Lay out words in rows of `per_row`, separated by two spaces
#[must_use]
pub fn columns(words: &[String], per_row: usize) -> Vec<String> {
    words
        .chunks(per_row.max(1))
        .map(|row| row.join("  "))
        .collect()
}
