//! Constraint engine
//!
//! Owns the full dictionary, the current constraints and the filtered candidate
//! list. Mutations never re-filter on their own; callers follow every change with
//! [`ConstraintEngine::filter_word_list`].

use super::filter::matching_indices;
use crate::core::{Constraints, WORD_LENGTH, Word, letters_to_string, normalize_letters};
use crate::wordlists::{FetchError, WordSource};
use tracing::{debug, info, warn};

/// Progress of the dictionary fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch has been started
    #[default]
    Idle,
    /// A fetch is in flight; word lists keep their previous values
    Pending,
    /// The last fetch succeeded
    Ready,
    /// The last fetch failed; prior state was kept
    Failed(String),
}

/// Constraint state plus the word lists it filters
#[derive(Debug, Default)]
pub struct ConstraintEngine {
    full_words: Vec<Word>,
    // Indices into `full_words`, in dictionary order
    filtered: Vec<usize>,
    constraints: Constraints,
    status: FetchStatus,
}

impl ConstraintEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine seeded with an already-loaded word list
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::engine::ConstraintEngine;
    /// use wordle_filter::wordlists::loader::words_from_slice;
    ///
    /// let mut engine = ConstraintEngine::with_words(words_from_slice(&["apple", "mango"]));
    /// engine.set_grey_letters("m");
    /// engine.filter_word_list();
    ///
    /// let remaining: Vec<&str> = engine.filtered_words().map(|w| w.text()).collect();
    /// assert_eq!(remaining, vec!["apple"]);
    /// ```
    #[must_use]
    pub fn with_words(words: Vec<Word>) -> Self {
        let mut engine = Self::new();
        engine.reset(words);
        engine
    }

    #[must_use]
    pub fn full_words(&self) -> &[Word] {
        &self.full_words
    }

    /// Current candidates, in dictionary order
    pub fn filtered_words(&self) -> impl ExactSizeIterator<Item = &Word> + '_ {
        self.filtered.iter().map(|&i| &self.full_words[i])
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn grey_letters(&self) -> &[u8] {
        self.constraints.grey()
    }

    #[must_use]
    pub const fn green_letters(&self) -> &[Option<u8>; WORD_LENGTH] {
        self.constraints.green()
    }

    #[must_use]
    pub const fn orange_letters(&self) -> &[Vec<u8>; WORD_LENGTH] {
        self.constraints.orange()
    }

    #[must_use]
    pub const fn fetch_status(&self) -> &FetchStatus {
        &self.status
    }

    /// Replace the grey letters with those typed in `input`
    ///
    /// Input is lowercased and deduplicated. Letters already held by a green or
    /// orange slot are dropped; they are returned so the caller can mention it.
    pub fn set_grey_letters(&mut self, input: &str) -> Vec<u8> {
        let dropped = self.constraints.set_grey(&normalize_letters(input));
        if !dropped.is_empty() {
            debug!(
                dropped = %letters_to_string(&dropped),
                "grey letters already claimed by green/orange"
            );
        }
        dropped
    }

    /// Set the green letter at `position` from a field value
    ///
    /// An empty value clears the slot. A value longer than one character, or a
    /// non-letter, leaves the state untouched and returns false.
    ///
    /// Single non-letters are rejected as well as over-long values: dictionary
    /// words hold only ASCII letters, so such a slot could never match.
    pub fn set_green_letter(&mut self, position: usize, value: &str) -> bool {
        let mut chars = value.chars();
        let letter = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase() as u8),
            _ => {
                debug!(position, value, "ignoring green letter input");
                return false;
            }
        };

        if !self.constraints.set_green(position, letter) {
            warn!(position, "green letter position out of range");
            return false;
        }
        true
    }

    /// Replace the orange letters at `position` with those typed in `input`
    pub fn set_orange_letters(&mut self, position: usize, input: &str) {
        if !self
            .constraints
            .set_orange(position, &normalize_letters(input))
        {
            warn!(position, "orange letter position out of range");
        }
    }

    /// Recompute the candidates from the full list and the current constraints
    ///
    /// Returns the number of candidates.
    pub fn filter_word_list(&mut self) -> usize {
        self.filtered = matching_indices(&self.full_words, &self.constraints);
        debug!(
            candidates = self.filtered.len(),
            total = self.full_words.len(),
            "filtered word list"
        );
        self.filtered.len()
    }

    /// Mark a fetch as in flight
    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Pending;
    }

    /// Apply the outcome of a fetch
    ///
    /// On success both lists become the fetched words and every constraint is
    /// cleared. On failure nothing but the status changes and the error is
    /// handed back.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged.
    pub fn complete_fetch(
        &mut self,
        result: Result<Vec<Word>, FetchError>,
    ) -> Result<usize, FetchError> {
        match result {
            Ok(words) => {
                info!(words = words.len(), "word list loaded");
                self.reset(words);
                Ok(self.full_words.len())
            }
            Err(err) => {
                warn!(%err, "word list fetch failed");
                self.status = FetchStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch the dictionary from `source` and apply the result
    ///
    /// # Errors
    ///
    /// Returns the fetch error; engine state other than the status is untouched.
    pub async fn load<S: WordSource>(&mut self, source: &S) -> Result<usize, FetchError> {
        self.begin_fetch();
        let result = source.fetch().await;
        self.complete_fetch(result)
    }

    fn reset(&mut self, words: Vec<Word>) {
        self.filtered = (0..words.len()).collect();
        self.full_words = words;
        self.constraints.clear();
        self.status = FetchStatus::Ready;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::MemoryWordSource;
    use crate::wordlists::loader::words_from_slice;

    fn engine(list: &[&str]) -> ConstraintEngine {
        ConstraintEngine::with_words(words_from_slice(list))
    }

    fn remaining(engine: &ConstraintEngine) -> Vec<&str> {
        engine.filtered_words().map(Word::text).collect()
    }

    fn is_subset(engine: &ConstraintEngine) -> bool {
        engine
            .filtered_words()
            .all(|w| engine.full_words().contains(w))
    }

    #[test]
    fn green_filter_example() {
        let mut engine = engine(&["apple", "mango", "amber"]);
        assert!(engine.set_green_letter(0, "a"));
        engine.filter_word_list();

        assert_eq!(remaining(&engine), vec!["apple", "amber"]);
    }

    #[test]
    fn orange_filter_example() {
        let mut engine = engine(&["stone", "tones", "notes"]);
        engine.set_orange_letters(0, "t");
        engine.filter_word_list();

        assert_eq!(remaining(&engine), vec!["stone", "notes"]);
    }

    #[test]
    fn grey_filter_example() {
        let mut engine = engine(&["apple", "mango"]);
        engine.set_grey_letters("m");
        engine.filter_word_list();

        assert_eq!(remaining(&engine), vec!["apple"]);
    }

    #[test]
    fn grey_yields_to_green() {
        let mut engine = engine(&["apple"]);
        engine.set_green_letter(0, "a");

        let dropped = engine.set_grey_letters("ab");

        assert_eq!(engine.grey_letters(), b"b");
        assert_eq!(dropped, b"a".to_vec());
    }

    #[test]
    fn grey_yields_to_orange() {
        let mut engine = engine(&["apple"]);
        engine.set_orange_letters(2, "p");
        engine.set_grey_letters("xp");
        assert_eq!(engine.grey_letters(), b"x");
    }

    #[test]
    fn orange_is_deduplicated() {
        let mut engine = engine(&["apple"]);
        engine.set_orange_letters(0, "aab");
        assert_eq!(engine.orange_letters()[0], b"ab".to_vec());
    }

    #[test]
    fn input_is_lowercased() {
        let mut engine = engine(&["apple"]);
        engine.set_grey_letters("XY");
        engine.set_green_letter(1, "P");
        engine.set_orange_letters(3, "LE");

        assert_eq!(engine.grey_letters(), b"xy");
        assert_eq!(engine.green_letters()[1], Some(b'p'));
        assert_eq!(engine.orange_letters()[3], b"le".to_vec());
    }

    #[test]
    fn green_rejects_multi_character_values() {
        let mut engine = engine(&["apple"]);
        engine.set_green_letter(0, "a");

        assert!(!engine.set_green_letter(0, "ab"));
        assert_eq!(engine.green_letters()[0], Some(b'a'));
    }

    #[test]
    fn green_rejects_non_letters() {
        let mut engine = engine(&["apple"]);
        assert!(!engine.set_green_letter(0, "1"));
        assert_eq!(engine.green_letters()[0], None);
    }

    #[test]
    fn green_empty_value_clears_slot() {
        let mut engine = engine(&["apple", "mango"]);
        engine.set_green_letter(0, "m");
        engine.filter_word_list();
        assert_eq!(remaining(&engine), vec!["mango"]);

        assert!(engine.set_green_letter(0, ""));
        engine.filter_word_list();
        assert_eq!(remaining(&engine), vec!["apple", "mango"]);
    }

    #[test]
    fn out_of_range_positions_are_ignored() {
        let mut engine = engine(&["apple"]);
        assert!(!engine.set_green_letter(5, "a"));
        engine.set_orange_letters(7, "b");
        assert!(engine.constraints().is_empty());
    }

    #[test]
    fn mutations_do_not_filter_on_their_own() {
        let mut engine = engine(&["apple", "mango"]);
        engine.set_grey_letters("m");
        assert_eq!(engine.filtered_count(), 2);

        engine.filter_word_list();
        assert_eq!(engine.filtered_count(), 1);
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut engine = engine(&["stone", "tones", "notes", "apple"]);
        engine.set_orange_letters(0, "t");
        engine.set_grey_letters("a");

        engine.filter_word_list();
        let first: Vec<String> = remaining(&engine).into_iter().map(String::from).collect();
        engine.filter_word_list();

        assert_eq!(remaining(&engine), first);
    }

    #[test]
    fn filtering_recomputes_from_the_full_list() {
        let mut engine = engine(&["apple", "mango", "amber"]);
        engine.set_grey_letters("m");
        engine.filter_word_list();
        assert_eq!(remaining(&engine), vec!["apple"]);

        // Loosening a constraint brings excluded words back
        engine.set_grey_letters("");
        engine.filter_word_list();
        assert_eq!(remaining(&engine), vec!["apple", "mango", "amber"]);
    }

    #[test]
    fn filtered_list_is_subset_of_full_list() {
        let mut engine = engine(&["stone", "tones", "notes", "apple", "mango", "amber"]);
        assert!(is_subset(&engine));

        engine.set_green_letter(0, "a");
        engine.filter_word_list();
        assert!(is_subset(&engine));

        engine.set_orange_letters(1, "e");
        engine.set_grey_letters("z");
        engine.filter_word_list();
        assert!(is_subset(&engine));
    }

    #[test]
    fn setter_order_does_not_change_result() {
        let list = ["stone", "tones", "notes", "nodes", "onset"];

        let mut a = engine(&list);
        a.set_green_letter(4, "s");
        a.set_orange_letters(0, "t");
        a.filter_word_list();

        let mut b = engine(&list);
        b.set_orange_letters(0, "t");
        b.filter_word_list();
        b.set_green_letter(4, "s");
        b.filter_word_list();

        assert_eq!(remaining(&a), remaining(&b));
    }

    #[tokio::test]
    async fn successful_load_resets_everything() {
        let mut engine = engine(&["apple"]);
        engine.set_green_letter(0, "a");
        engine.set_orange_letters(1, "p");
        engine.set_grey_letters("z");
        engine.filter_word_list();

        let source = MemoryWordSource::from_slice(&["stone", "tones", "notes"]);
        let loaded = engine.load(&source).await.unwrap();

        assert_eq!(loaded, 3);
        assert_eq!(engine.fetch_status(), &FetchStatus::Ready);
        assert!(engine.grey_letters().is_empty());
        assert_eq!(engine.green_letters(), &[None; WORD_LENGTH]);
        assert!(engine.orange_letters().iter().all(Vec::is_empty));
        assert_eq!(remaining(&engine), vec!["stone", "tones", "notes"]);
        assert_eq!(engine.full_words().len(), 3);
    }

    #[tokio::test]
    async fn failed_load_keeps_prior_state() {
        let mut engine = engine(&["apple", "mango"]);
        engine.set_grey_letters("m");
        engine.filter_word_list();

        let result = engine.load(&MemoryWordSource::default()).await;

        assert!(matches!(result, Err(FetchError::EmptyWordList)));
        assert!(matches!(engine.fetch_status(), FetchStatus::Failed(_)));
        assert_eq!(engine.grey_letters(), b"m");
        assert_eq!(engine.full_words().len(), 2);
        assert_eq!(remaining(&engine), vec!["apple"]);
    }

    #[test]
    fn pending_fetch_leaves_lists_untouched() {
        let mut engine = ConstraintEngine::new();
        assert_eq!(engine.fetch_status(), &FetchStatus::Idle);

        engine.begin_fetch();

        assert_eq!(engine.fetch_status(), &FetchStatus::Pending);
        assert!(engine.full_words().is_empty());
        assert_eq!(engine.filtered_count(), 0);
    }

    #[test]
    fn complete_fetch_after_pending() {
        let mut engine = ConstraintEngine::new();
        engine.begin_fetch();

        let loaded = engine
            .complete_fetch(Ok(words_from_slice(&["apple", "mango"])))
            .unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(engine.filtered_count(), 2);
        assert_eq!(engine.fetch_status(), &FetchStatus::Ready);
    }
}
