//! Dictionary source configuration
//!
//! Collected from command-line flags, falling back to environment variables.

use crate::wordlists::{
    DEFAULT_WORDLIST_URL, DictionarySource, FetchError, FileWordSource, HttpWordSource,
};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the dictionary comes from
#[derive(Debug, Clone, Args)]
pub struct SourceConfig {
    /// URL of a newline-delimited five-letter word list
    #[arg(long, global = true, env = "WORDLE_FILTER_URL", default_value = DEFAULT_WORDLIST_URL)]
    pub url: String,

    /// Local word list file (takes precedence over --url)
    #[arg(short = 'w', long, global = true, env = "WORDLE_FILTER_WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// Download timeout in seconds
    #[arg(long, global = true, env = "WORDLE_FILTER_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WORDLIST_URL.to_string(),
            wordlist: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SourceConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Build the configured source: the local file if one is given, otherwise HTTP
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be constructed.
    pub fn into_source(self) -> Result<DictionarySource, FetchError> {
        let timeout = self.timeout();
        match self.wordlist {
            Some(path) => Ok(DictionarySource::File(FileWordSource::new(path))),
            None => Ok(DictionarySource::Http(HttpWordSource::new(self.url, timeout)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_http() {
        let source = SourceConfig::default().into_source().unwrap();
        assert!(matches!(source, DictionarySource::Http(_)));
        assert_eq!(source.describe(), DEFAULT_WORDLIST_URL);
    }

    #[test]
    fn wordlist_file_takes_precedence() {
        let config = SourceConfig {
            wordlist: Some(PathBuf::from("words.txt")),
            ..SourceConfig::default()
        };
        let source = config.into_source().unwrap();
        assert!(matches!(source, DictionarySource::File(_)));
        assert_eq!(source.describe(), "words.txt");
    }

    #[test]
    fn timeout_is_seconds() {
        let config = SourceConfig {
            timeout: 3,
            ..SourceConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
