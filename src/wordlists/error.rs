//! Errors raised while retrieving the dictionary

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to fetch or parse the word list
///
/// No retry is attempted; callers surface the error and keep their prior state.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure, timeout or non-success HTTP status
    #[error("failed to download word list: {0}")]
    Http(#[from] reqwest::Error),

    /// Local word list could not be read
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document held no valid five-letter words
    #[error("word list contained no valid five-letter words")]
    EmptyWordList,

    /// The fetch task ended without delivering a result
    #[error("word list fetch was interrupted")]
    Interrupted,
}
