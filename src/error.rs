//! Error types for the console client.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Everything that can go wrong between a page address and a running feed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid page url: {0}")]
    Url(#[from] url::ParseError),

    #[error("page url scheme {0:?} is not http or https")]
    UnsupportedScheme(String),

    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
