use thiserror::Error;

/// Failures raised by a `JsonHttpClient`.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upstream returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid header {0}")]
    InvalidHeader(String),
    #[error("Failed to parse response body: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
