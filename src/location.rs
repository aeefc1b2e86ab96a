//! Feed endpoint derivation.
//!
//! The page script builds its socket address from the page location: it
//! resolves `/ws` against the address and swaps the `http` scheme prefix
//! for `ws`, which turns `https` into `wss` along the way. Same contract
//! here, with unusable page addresses surfaced as errors instead of
//! garbage endpoints.

use url::Url;

use crate::error::{ClientError, Result};

/// Path of the event feed, relative to the page origin.
pub const FEED_PATH: &str = "/ws";

/// Derive the WebSocket endpoint serving the feed for `page`.
///
/// The authority (host and explicit port) is kept, the path is replaced
/// with [`FEED_PATH`], and any query or fragment is dropped.
pub fn websocket_url(page: &Url) -> Result<Url> {
    let scheme = match page.scheme() {
        s @ "http" | s @ "https" => s.replacen("http", "ws", 1),
        other => return Err(ClientError::UnsupportedScheme(other.to_owned())),
    };
    let mut endpoint = page.join(FEED_PATH)?;
    endpoint
        .set_scheme(&scheme)
        .map_err(|()| ClientError::UnsupportedScheme(scheme))?;
    Ok(endpoint)
}
