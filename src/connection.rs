//! Event feed connection.
//!
//! The browser page opens its socket as a side effect of loading and never
//! closes it. Here the connection is an owned value instead:
//! [`Connection::open`] performs the handshake, inbound traffic is read
//! through explicit calls or driven by [`Connection::run`], and
//! [`Connection::close`] runs the closing handshake.

use std::time::Duration;

use futures_util::{SinkExt, Stream, StreamExt};
use log::{debug, info, trace};
use tokio::net::TcpStream;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::tungstenite::Error as WsError;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use url::Url;

use crate::error::Result;
use crate::location;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Runtime knobs for [`Connection::run`].
#[derive(Debug, Clone, Default)]
pub struct FeedConfig {
    /// When set, send an incrementing counter over the socket on this
    /// period. Off by default: a plain feed never writes to the server.
    pub send_interval: Option<Duration>,
}

/// A live connection to the event feed of one server.
#[derive(Debug)]
pub struct Connection {
    endpoint: Url,
    inner: Socket,
}

impl Connection {
    /// Open a connection to the feed endpoint derived from `page`.
    ///
    /// Exactly one connection per call; there is no retry.
    pub async fn open(page: &Url) -> Result<Connection> {
        let endpoint = location::websocket_url(page)?;
        debug!("connecting to {endpoint}");
        let (inner, response) = connect_async(endpoint.as_str()).await?;
        info!("connection open: {endpoint} ({})", response.status());
        Ok(Connection { endpoint, inner })
    }

    /// The derived endpoint this connection talks to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Next data message from the feed, `None` once the connection is
    /// done. Control frames are dealt with on the way; payloads are opaque
    /// and handed over without parsing or validation.
    pub async fn next_message(&mut self) -> Result<Option<Message>> {
        next_data(&mut self.inner).await
    }

    /// Send one message to the server. Nothing calls this on a plain
    /// feed; the counter path of [`Connection::run`] does.
    pub async fn send(&mut self, message: Message) -> Result<()> {
        self.inner.send(message).await?;
        Ok(())
    }

    /// Explicit teardown: run the closing handshake and drain the socket.
    ///
    /// Consuming `self` means a closed connection cannot be written to.
    pub async fn close(mut self) -> Result<()> {
        debug!("closing connection to {}", self.endpoint);
        self.inner.close(None).await?;
        while let Some(item) = self.inner.next().await {
            let message = item?;
            trace!("message during close: {message:?}");
        }
        info!("connection closed: {}", self.endpoint);
        Ok(())
    }

    /// Drive the connection until the server ends it: log every inbound
    /// message, and when [`FeedConfig::send_interval`] is set, send an
    /// incrementing counter on that period.
    pub async fn run(self, config: &FeedConfig) -> Result<()> {
        let Connection { endpoint, inner } = self;
        let (mut sink, mut stream) = inner.split();

        if let Some(period) = config.send_interval {
            let mut counter: u64 = 0;
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = ticks.tick() => {
                        counter += 1;
                        trace!("sending counter {counter}");
                        sink.send(Message::text(counter.to_string())).await?;
                    }
                    message = next_data(&mut stream) => match message? {
                        Some(message) => log_message(&message),
                        None => break,
                    },
                }
            }
        } else {
            while let Some(message) = next_data(&mut stream).await? {
                log_message(&message);
            }
        }

        info!("connection closed: {endpoint}");
        Ok(())
    }
}

/// Read until the next data message. Ping/pong is answered by the protocol
/// layer underneath; a close frame from the server is logged and the read
/// continues until the stream reports the end.
async fn next_data<S>(socket: &mut S) -> Result<Option<Message>>
where
    S: Stream<Item = std::result::Result<Message, WsError>> + Unpin,
{
    while let Some(item) = socket.next().await {
        match item {
            Ok(message @ Message::Text(_)) | Ok(message @ Message::Binary(_)) => {
                return Ok(Some(message))
            }
            Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => trace!("control frame from server"),
            Ok(Message::Close(frame)) => info!("close frame from server: {frame:?}"),
            Ok(Message::Frame(_)) => {}
            Err(WsError::ConnectionClosed) | Err(WsError::AlreadyClosed) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(None)
}

/// One diagnostic line per inbound message, payload untouched.
fn log_message(message: &Message) {
    match message {
        Message::Text(text) => info!("message is {text}"),
        Message::Binary(data) => info!("message is {data:?}"),
        _ => {}
    }
}
