//! One-shot filtering from command-line constraints

use crate::core::{Constraints, WORD_LENGTH, letters_to_string};
use crate::engine::ConstraintEngine;
use crate::wordlists::{FetchError, WordSource};
use indicatif::{ProgressBar, ProgressStyle};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Malformed `--green` or `--orange` argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterArgError {
    #[error("green pattern must have exactly 5 characters, got {0}")]
    PatternLength(usize),
    #[error("invalid character '{0}' in green pattern (use a letter or -, _, .)")]
    PatternCharacter(char),
    #[error("orange letters must look like POSITION=LETTERS, e.g. 0=t")]
    OrangeSyntax,
    #[error("position must be between 0 and 4, got '{0}'")]
    Position(String),
}

/// Known letters by position, e.g. `a---e`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreenPattern([Option<char>; WORD_LENGTH]);

impl GreenPattern {
    #[must_use]
    pub const fn slots(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.0
    }
}

impl FromStr for GreenPattern {
    type Err = FilterArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(FilterArgError::PatternLength(chars.len()));
        }

        let mut slots = [None; WORD_LENGTH];
        for (slot, ch) in slots.iter_mut().zip(chars) {
            *slot = match ch {
                '-' | '_' | '.' => None,
                c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
                c => return Err(FilterArgError::PatternCharacter(c)),
            };
        }

        Ok(Self(slots))
    }
}

/// Letters present in the word but not at `position`, e.g. `2=ae`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrangeSpec {
    pub position: usize,
    pub letters: String,
}

impl FromStr for OrangeSpec {
    type Err = FilterArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, letters) = s.split_once('=').ok_or(FilterArgError::OrangeSyntax)?;
        let position = position.trim();
        let index: usize = position
            .parse()
            .ok()
            .filter(|&p| p < WORD_LENGTH)
            .ok_or_else(|| FilterArgError::Position(position.to_string()))?;

        Ok(Self {
            position: index,
            letters: letters.trim().to_string(),
        })
    }
}

/// Constraints requested on the command line
#[derive(Debug, Clone, Default)]
pub struct FilterRequest {
    pub grey: String,
    pub green: GreenPattern,
    pub orange: Vec<OrangeSpec>,
}

/// Outcome of a one-shot filter
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub total_words: usize,
    pub candidates: Vec<String>,
    pub constraints: Constraints,
    /// Grey letters dropped because a green or orange slot claims them
    pub ignored_grey: String,
}

/// Apply a request to a loaded engine and filter
///
/// Green and orange are applied before grey, so grey letters that the same
/// request claims elsewhere are ignored rather than excluding every candidate.
pub fn apply_request(engine: &mut ConstraintEngine, request: &FilterRequest) -> FilterResult {
    for (position, letter) in request.green.slots().iter().enumerate() {
        if let Some(letter) = letter {
            engine.set_green_letter(position, &letter.to_string());
        }
    }
    for spec in &request.orange {
        // Repeated positions accumulate, like typing more letters into the same field
        let mut letters = letters_to_string(&engine.orange_letters()[spec.position]);
        letters.push_str(&spec.letters);
        engine.set_orange_letters(spec.position, &letters);
    }
    let ignored_grey = letters_to_string(&engine.set_grey_letters(&request.grey));

    engine.filter_word_list();

    FilterResult {
        total_words: engine.full_words().len(),
        candidates: engine
            .filtered_words()
            .map(|w| w.text().to_string())
            .collect(),
        constraints: engine.constraints().clone(),
        ignored_grey,
    }
}

/// Load the dictionary from `source` behind a spinner, then filter it
///
/// # Errors
///
/// Returns the fetch error if the dictionary cannot be loaded.
///
/// # Panics
///
/// Panics if the spinner template is invalid (it is a constant).
pub async fn run_filter<S: WordSource>(
    source: &S,
    origin: &str,
    request: &FilterRequest,
) -> Result<FilterResult, FetchError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Loading word list from {origin}"));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let mut engine = ConstraintEngine::new();
    let loaded = engine.load(source).await;
    spinner.finish_and_clear();
    loaded?;

    Ok(apply_request(&mut engine, request))
}
