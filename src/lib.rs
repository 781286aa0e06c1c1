//! Wordle Filter
//!
//! Narrows a five-letter dictionary to the words consistent with Wordle feedback:
//! grey letters (absent), green letters (correct position) and orange letters
//! (present, wrong position).
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::engine::ConstraintEngine;
//! use wordle_filter::wordlists::loader::words_from_slice;
//!
//! let mut engine = ConstraintEngine::with_words(words_from_slice(&["stone", "tones", "notes"]));
//!
//! // 't' is in the word, but not first
//! engine.set_orange_letters(0, "t");
//! engine.filter_word_list();
//!
//! let candidates: Vec<&str> = engine.filtered_words().map(|w| w.text()).collect();
//! assert_eq!(candidates, vec!["stone", "notes"]);
//! ```

// Core domain types
pub mod core;

// Constraint state and filtering
pub mod engine;

// Dictionary sources
pub mod wordlists;

// Source configuration
pub mod config;

// Logging setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
