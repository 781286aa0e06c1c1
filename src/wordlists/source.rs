//! Dictionary sources
//!
//! A [`WordSource`] delivers the full word list once, asynchronously. The HTTP
//! source is the default; a local file or an in-memory list can stand in for it.

use super::FetchError;
use super::loader::{parse_word_list, words_from_slice};
use crate::core::Word;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Default dictionary: the Stanford GraphBase five-letter words, one per line
pub const DEFAULT_WORDLIST_URL: &str =
    "https://raw.githubusercontent.com/charlesreid1/five-letter-words/master/sgb-words.txt";

/// Something that can produce the full, ordered dictionary
///
/// Implementations make a single attempt; there is no retry policy.
pub trait WordSource {
    /// Retrieve the word list
    fn fetch(&self) -> impl Future<Output = Result<Vec<Word>, FetchError>> + Send;
}

/// Newline-delimited word list served over HTTP
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    client: reqwest::Client,
    url: String,
}

impl HttpWordSource {
    /// Build a source for `url` whose requests give up after `timeout`
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WordSource for HttpWordSource {
    async fn fetch(&self) -> Result<Vec<Word>, FetchError> {
        info!(url = %self.url, "downloading word list");
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_word_list(&body)
    }
}

/// Newline-delimited word list on the local filesystem
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    async fn fetch(&self) -> Result<Vec<Word>, FetchError> {
        info!(path = %self.path.display(), "reading word list");
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_word_list(&content)
    }
}

/// Fixed word list held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryWordSource {
    words: Vec<Word>,
}

impl MemoryWordSource {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build from string entries, skipping invalid ones
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::new(words_from_slice(slice))
    }
}

impl WordSource for MemoryWordSource {
    async fn fetch(&self) -> Result<Vec<Word>, FetchError> {
        if self.words.is_empty() {
            return Err(FetchError::EmptyWordList);
        }
        Ok(self.words.clone())
    }
}

/// The source selected by configuration
#[derive(Debug, Clone)]
pub enum DictionarySource {
    Http(HttpWordSource),
    File(FileWordSource),
    Memory(MemoryWordSource),
}

impl DictionarySource {
    /// Human-readable origin, for status lines
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.url().to_string(),
            Self::File(source) => source.path.display().to_string(),
            Self::Memory(source) => format!("{} built-in words", source.words.len()),
        }
    }
}

impl WordSource for DictionarySource {
    async fn fetch(&self) -> Result<Vec<Word>, FetchError> {
        match self {
            Self::Http(source) => source.fetch().await,
            Self::File(source) => source.fetch().await,
            Self::Memory(source) => source.fetch().await,
        }
    }
}
