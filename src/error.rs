//! Error types for the decoder

use thiserror::Error;

/// Result type alias for decoder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching and decoding a document.
///
/// Rows of the source table that fail to parse are not represented here:
/// they are dropped during grid reconstruction and only show up as `warn`
/// level log records.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to build the HTTP client
    #[error("Initialization failed: {0}")]
    InitializationError(String),

    /// Failed to retrieve the document (bad URL, network failure, non-2xx status)
    #[error("Failed to fetch document: {0}")]
    FetchError(String),

    /// The document could not be interpreted as a coordinate table
    #[error("Failed to parse document: {0}")]
    ParseError(String),
}
