use reqwest::StatusCode;
use thiserror::Error;

/// Why an alerts fetch produced no data.
///
/// Every variant collapses to the same user-facing text; the distinction only
/// shows up in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(StatusCode),

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A state code that is not exactly two characters long.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("state code must be exactly 2 characters, got {0}")]
pub struct InvalidStateCode(pub usize);
