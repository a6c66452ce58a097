use std::io::Error as IoError;

use thiserror::Error;
use url::ParseError as UrlParseError;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for catalog operations
#[derive(Error, Debug)]
pub enum Error {
    /// Network or decode failure while talking to the catalog API
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid catalog endpoint URL
    #[error("Invalid catalog URL: {0}")]
    Url(#[from] UrlParseError),

    /// Terminal or filesystem I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}
