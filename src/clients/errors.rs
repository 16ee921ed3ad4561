use thiserror::Error;

/// Errors returned by the Last.fm client
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP exchange with Last.fm could not be completed
    #[error("LastFM transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The response body was not valid JSON or did not have the expected shape
    #[error("LastFM decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// The client could not be configured from the environment
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result alias used across the clients
pub type Result<T> = std::result::Result<T, Error>;
