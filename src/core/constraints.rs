//! Letter constraints learned from guess feedback
//!
//! Three independent categories:
//! - Grey: letters absent from the target word
//! - Green: one confirmed letter per position
//! - Orange: letters present in the word but not at that position
//!
//! Letters are stored as lowercase ASCII bytes. Every write deduplicates its input,
//! keeping the first occurrence of each letter.

use super::word::WORD_LENGTH;

/// Lowercase, keep ASCII letters only and drop repeats (first occurrence wins)
///
/// This is how raw text typed into a letter field becomes a letter set.
///
/// # Examples
/// ```
/// use wordle_filter::core::normalize_letters;
///
/// assert_eq!(normalize_letters("MaM-b"), b"mab".to_vec());
/// ```
#[must_use]
pub fn normalize_letters(input: &str) -> Vec<u8> {
    let letters: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_lowercase())
        .collect();
    dedup_letters(&letters)
}

/// Drop repeated letters, preserving first-occurrence order
#[must_use]
pub fn dedup_letters(letters: &[u8]) -> Vec<u8> {
    let mut unique = Vec::with_capacity(letters.len());
    for &letter in letters {
        if !unique.contains(&letter) {
            unique.push(letter);
        }
    }
    unique
}

/// Render a letter set as text, e.g. for an input field
#[must_use]
pub fn letters_to_string(letters: &[u8]) -> String {
    letters.iter().map(|&b| char::from(b)).collect()
}

/// Current grey/green/orange constraint state
///
/// Green and orange always have exactly [`WORD_LENGTH`] slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    grey: Vec<u8>,
    green: [Option<u8>; WORD_LENGTH],
    orange: [Vec<u8>; WORD_LENGTH],
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn grey(&self) -> &[u8] {
        &self.grey
    }

    #[inline]
    #[must_use]
    pub const fn green(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.green
    }

    #[inline]
    #[must_use]
    pub const fn orange(&self) -> &[Vec<u8>; WORD_LENGTH] {
        &self.orange
    }

    /// True when no constraint of any category is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grey.is_empty()
            && self.green.iter().all(Option::is_none)
            && self.orange.iter().all(Vec::is_empty)
    }

    /// Check whether a letter is already claimed by a green or orange slot
    #[must_use]
    pub fn is_claimed(&self, letter: u8) -> bool {
        self.green.contains(&Some(letter)) || self.orange.iter().any(|slot| slot.contains(&letter))
    }

    /// Replace the grey set
    ///
    /// Letters already claimed by green or orange slots are dropped silently:
    /// a word can repeat a letter, so a grey square for a letter that is also
    /// green or orange elsewhere must not exclude it.
    ///
    /// Returns the letters that were dropped.
    pub fn set_grey(&mut self, letters: &[u8]) -> Vec<u8> {
        let (kept, dropped): (Vec<u8>, Vec<u8>) = dedup_letters(letters)
            .into_iter()
            .partition(|&letter| !self.is_claimed(letter));
        self.grey = kept;
        dropped
    }

    /// Set or clear the green letter at `position`
    ///
    /// Returns false (and changes nothing) if `position` is out of range.
    pub fn set_green(&mut self, position: usize, letter: Option<u8>) -> bool {
        let Some(slot) = self.green.get_mut(position) else {
            return false;
        };
        *slot = letter;
        true
    }

    /// Replace the orange letters at `position`
    ///
    /// Returns false (and changes nothing) if `position` is out of range.
    pub fn set_orange(&mut self, position: usize, letters: &[u8]) -> bool {
        let Some(slot) = self.orange.get_mut(position) else {
            return false;
        };
        *slot = dedup_letters(letters);
        true
    }

    /// Reset every category to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
