//! Core domain types
//!
//! Dictionary words and the letter constraints learned from guess feedback.
//! Everything here is pure and synchronous.

mod constraints;
mod word;

pub use constraints::{Constraints, dedup_letters, letters_to_string, normalize_letters};
pub use word::{WORD_LENGTH, Word, WordError};
