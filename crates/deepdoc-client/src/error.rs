//! Error type for search requests.

use deepdoc_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("Search service returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not a valid search response.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The request URL could not be built from the configuration.
    #[error("Invalid request URL: {0}")]
    Url(String),
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Decode(message) => Self::Decode(message),
            other => Self::Url(other.to_string()),
        }
    }
}
