//! Terminal counterpart of the detector's hosting page.
//!
//! Connects to the `/ws` feed derived from the page address given on the
//! command line and logs every message the server pushes. Lines typed on
//! stdin act like clicks on the page's play/pause button: each one flips
//! the label and prints the new one. The two halves are independent,
//! exactly like on the page: clicking never touches the socket.
//!
//! Usage:
//!
//!     beep-console [PAGE_URL] [SEND_INTERVAL_MS]
//!
//! `PAGE_URL` defaults to `http://localhost:8080/`, where the detector
//! serves its page. When `SEND_INTERVAL_MS` is given, an incrementing
//! counter is written to the feed on that period; by default nothing is
//! ever sent.

use std::env;
use std::time::Duration;

use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;

use beep_console::{ClientError, Connection, FeedConfig, PlayPauseButton, PLAY_LABEL};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    env_logger::init();

    let page = env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080/".to_owned());
    let page = Url::parse(&page)?;

    let send_interval = env::args()
        .nth(2)
        .map(|ms| ms.parse().expect("SEND_INTERVAL_MS must be a whole number of milliseconds"))
        .map(Duration::from_millis);
    let config = FeedConfig { send_interval };

    let conn = Connection::open(&page).await?;
    info!("feed is {}", conn.endpoint());

    tokio::spawn(async move {
        let mut button = PlayPauseButton::new(PLAY_LABEL);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(_)) = lines.next_line().await {
            println!("{}", button.click());
        }
    });

    conn.run(&config).await
}
