//! Candidate filtering over a word list
//!
//! The constraints are compiled once per filter pass into a predicate, which is then
//! evaluated against every word in parallel. Order of the input list is preserved.

use crate::core::{Constraints, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Predicate compiled from a [`Constraints`] snapshot
///
/// A word matches when:
/// 1. every green slot holds the word's letter at that position,
/// 2. it contains none of the grey letters,
/// 3. for every orange slot, none of its letters sit at that position and each of
///    them appears somewhere in the word.
#[derive(Debug)]
pub struct CandidateFilter<'c> {
    greens: Vec<(usize, u8)>,
    grey: FxHashSet<u8>,
    oranges: Vec<(usize, &'c [u8])>,
}

impl<'c> CandidateFilter<'c> {
    #[must_use]
    pub fn new(constraints: &'c Constraints) -> Self {
        let greens = constraints
            .green()
            .iter()
            .enumerate()
            .filter_map(|(position, letter)| letter.map(|l| (position, l)))
            .collect();

        let grey = constraints.grey().iter().copied().collect();

        let oranges = constraints
            .orange()
            .iter()
            .enumerate()
            .filter(|(_, letters)| !letters.is_empty())
            .map(|(position, letters)| (position, letters.as_slice()))
            .collect();

        Self {
            greens,
            grey,
            oranges,
        }
    }

    /// Check a single word against every constraint
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let greens_ok = self
            .greens
            .iter()
            .all(|&(position, letter)| word.char_at(position) == letter);
        if !greens_ok {
            return false;
        }

        // Empty grey set means no grey filtering at all
        if !self.grey.is_empty() && word.chars().iter().any(|c| self.grey.contains(c)) {
            return false;
        }

        self.oranges.iter().all(|&(position, letters)| {
            !letters.contains(&word.char_at(position))
                && letters.iter().all(|&letter| word.has_letter(letter))
        })
    }
}

/// Indices of the words in `words` that satisfy `constraints`, in list order
///
/// # Examples
/// ```
/// use wordle_filter::core::{Constraints, Word};
/// use wordle_filter::engine::matching_indices;
///
/// let words: Vec<Word> = ["apple", "mango", "amber"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut constraints = Constraints::new();
/// constraints.set_green(0, Some(b'a'));
///
/// assert_eq!(matching_indices(&words, &constraints), vec![0, 2]);
/// ```
#[must_use]
pub fn matching_indices(words: &[Word], constraints: &Constraints) -> Vec<usize> {
    if constraints.is_empty() {
        return (0..words.len()).collect();
    }

    let filter = CandidateFilter::new(constraints);
    words
        .par_iter()
        .enumerate()
        .filter(|(_, word)| filter.matches(word))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts<'a>(list: &'a [Word], indices: &[usize]) -> Vec<&'a str> {
        indices.iter().map(|&i| list[i].text()).collect()
    }

    #[test]
    fn no_constraints_keeps_everything() {
        let list = words(&["apple", "mango", "amber"]);
        let constraints = Constraints::new();
        assert_eq!(matching_indices(&list, &constraints), vec![0, 1, 2]);
    }

    #[test]
    fn green_letter_narrows_by_position() {
        let list = words(&["apple", "mango", "amber"]);
        let mut constraints = Constraints::new();
        constraints.set_green(0, Some(b'a'));

        let result = matching_indices(&list, &constraints);
        assert_eq!(texts(&list, &result), vec!["apple", "amber"]);
    }

    #[test]
    fn multiple_greens_are_combined() {
        let list = words(&["apple", "amber", "angle", "ample"]);
        let mut constraints = Constraints::new();
        constraints.set_green(0, Some(b'a'));
        constraints.set_green(4, Some(b'e'));
        constraints.set_green(1, Some(b'm'));

        let result = matching_indices(&list, &constraints);
        assert_eq!(texts(&list, &result), vec!["ample"]);
    }

    #[test]
    fn grey_letter_excludes_anywhere() {
        let list = words(&["apple", "mango"]);
        let mut constraints = Constraints::new();
        constraints.set_grey(b"m");

        let result = matching_indices(&list, &constraints);
        assert_eq!(texts(&list, &result), vec!["apple"]);
    }

    #[test]
    fn orange_letter_excludes_position_and_requires_presence() {
        let list = words(&["stone", "tones", "notes"]);
        let mut constraints = Constraints::new();
        constraints.set_orange(0, b"t");

        let result = matching_indices(&list, &constraints);
        assert_eq!(texts(&list, &result), vec!["stone", "notes"]);
    }

    #[test]
    fn orange_letter_missing_from_word_is_excluded() {
        let list = words(&["stone", "apple"]);
        let mut constraints = Constraints::new();
        constraints.set_orange(2, b"p");

        // "apple" has p at 2 (excluded); "stone" has no p (excluded)
        assert!(matching_indices(&list, &constraints).is_empty());
    }

    #[test]
    fn every_letter_in_an_orange_slot_must_appear() {
        let list = words(&["stone", "notes", "onset", "trend"]);
        let mut constraints = Constraints::new();
        constraints.set_orange(4, b"tr");

        let result = matching_indices(&list, &constraints);
        assert_eq!(texts(&list, &result), vec!["trend"]);
    }

    #[test]
    fn same_letter_in_several_orange_slots_applies_each() {
        let list = words(&["stone", "tones", "notes", "onset"]);
        let mut constraints = Constraints::new();
        constraints.set_orange(0, b"t");
        constraints.set_orange(1, b"t");

        let result = matching_indices(&list, &constraints);
        assert_eq!(texts(&list, &result), vec!["notes", "onset"]);
    }

    #[test]
    fn all_categories_combine() {
        let list = words(&["stone", "tones", "notes", "nodes", "onset", "steno"]);
        let mut constraints = Constraints::new();
        constraints.set_green(4, Some(b's'));
        constraints.set_orange(0, b"t");
        constraints.set_grey(b"d");

        let result = matching_indices(&list, &constraints);
        assert_eq!(texts(&list, &result), vec!["notes"]);
    }

    #[test]
    fn result_preserves_input_order() {
        let list = words(&["zesty", "amber", "azure", "aloft", "abbey"]);
        let mut constraints = Constraints::new();
        constraints.set_green(0, Some(b'a'));

        assert_eq!(matching_indices(&list, &constraints), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_word_list() {
        let mut constraints = Constraints::new();
        constraints.set_grey(b"a");
        assert!(matching_indices(&[], &constraints).is_empty());
    }
}
