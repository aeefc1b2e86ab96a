use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use log::*;
use tokio::net::TcpListener;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::protocol::Message;
use url::Url;

use beep_console::{Connection, FeedConfig};

async fn bind() -> (TcpListener, Url) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    let page = Url::parse(&format!("http://{addr}/index.html")).expect("Not a valid url");
    (listener, page)
}

#[tokio::test]
async fn feed_messages_arrive() {
    let _ = env_logger::try_init();

    let (listener, page) = bind().await;
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        let (connection, _) = listener.accept().await.expect("No connections to accept");
        let mut stream = accept_async(connection).await.expect("Failed to handshake");
        info!("Server running");
        for i in 1..=3 {
            stream
                .send(Message::text(format!("beep {i}")))
                .await
                .expect("Failed to send message");
        }
        stream.close(None).await.expect("Failed to close");
        while stream.next().await.is_some() {}
    });

    let mut conn = Connection::open(&page).await.expect("Client failed to connect");
    assert_eq!(conn.endpoint().as_str(), format!("ws://{addr}/ws"));

    for i in 1..=3 {
        let message = conn
            .next_message()
            .await
            .expect("Failed to read message")
            .expect("Feed ended early");
        assert_eq!(message, Message::text(format!("beep {i}")));
    }

    info!("Waiting for the feed to end");
    assert!(conn.next_message().await.expect("Failed to read").is_none());
}

#[tokio::test]
async fn plain_feed_never_writes() {
    let _ = env_logger::try_init();

    let (msg_tx, msg_rx) = futures_channel::oneshot::channel();
    let (listener, page) = bind().await;

    tokio::spawn(async move {
        let (connection, _) = listener.accept().await.expect("No connections to accept");
        let mut stream = accept_async(connection).await.expect("Failed to handshake");
        stream
            .send(Message::text("beep"))
            .await
            .expect("Failed to send message");
        let mut inbound = vec![];
        while let Some(item) = stream.next().await {
            match item {
                Ok(message) if message.is_text() || message.is_binary() => inbound.push(message),
                Ok(_) => {}
                Err(e) => panic!("server read error: {e}"),
            }
        }
        msg_tx.send(inbound).expect("Failed to send results");
    });

    let mut conn = Connection::open(&page).await.expect("Client failed to connect");
    let first = conn
        .next_message()
        .await
        .expect("Failed to read message")
        .expect("Feed ended early");
    assert_eq!(first, Message::text("beep"));
    conn.close().await.expect("Failed to close");

    let inbound = msg_rx.await.expect("Failed to receive results");
    assert!(inbound.is_empty(), "client sent {inbound:?} unprompted");
}

#[tokio::test]
async fn counter_ticks_over_the_feed() {
    let _ = env_logger::try_init();

    let (msg_tx, msg_rx) = futures_channel::oneshot::channel();
    let (listener, page) = bind().await;

    tokio::spawn(async move {
        let (connection, _) = listener.accept().await.expect("No connections to accept");
        let mut stream = accept_async(connection).await.expect("Failed to handshake");
        let mut counters = vec![];
        while counters.len() < 3 {
            let item = stream.next().await.expect("Feed ended before three counters");
            match item {
                Ok(Message::Text(text)) => counters.push(text.as_str().to_owned()),
                Ok(other) => panic!("unexpected message: {other:?}"),
                Err(e) => panic!("server read error: {e}"),
            }
        }
        stream.close(None).await.expect("Failed to close");
        while stream.next().await.is_some() {}
        msg_tx.send(counters).expect("Failed to send results");
    });

    let conn = Connection::open(&page).await.expect("Client failed to connect");
    let config = FeedConfig { send_interval: Some(Duration::from_millis(20)) };
    conn.run(&config).await.expect("Feed should end cleanly");

    let counters = msg_rx.await.expect("Failed to receive results");
    assert_eq!(counters, ["1", "2", "3"]);
}
