//! Word lists
//!
//! Retrieves the dictionary from HTTP, a local file or memory, and parses it.

mod error;
pub mod loader;
mod source;

pub use error::FetchError;
pub use source::{
    DEFAULT_WORDLIST_URL, DictionarySource, FileWordSource, HttpWordSource, MemoryWordSource,
    WordSource,
};
