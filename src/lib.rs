//! Terminal client for a beep detection event feed.
//!
//! The detector serves a small web page next to a WebSocket endpoint at
//! `/ws` and pushes whatever it has to say over that socket; the page logs
//! every message it receives and carries a single play/pause button. This
//! crate is that client brought to native code. The page's implicit,
//! load-time socket becomes an owned [`Connection`] with an explicit
//! open/close lifecycle, inbound messages go to the log untouched, and the
//! button is a plain two-state [`PlayPauseButton`] driven by whoever owns
//! it.
//!
//! The two halves are as independent here as they are on the page:
//! activating the control never touches the connection.

pub use tokio_tungstenite::tungstenite;

pub mod control;
pub mod error;
pub mod location;

mod connection;

pub use connection::{Connection, FeedConfig};
pub use control::{PlaybackState, PlayPauseButton, PAUSE_LABEL, PLAY_LABEL};
pub use error::{ClientError, Result};
pub use location::{websocket_url, FEED_PATH};
pub use tokio_tungstenite::tungstenite::protocol::Message;
