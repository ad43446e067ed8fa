use anyhow::{Result, anyhow};
use flashblocks_types::{Flashblock, FlashblockDecodeError, FrameKind};
use futures_util::stream::SplitStream;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::Error::ConnectionClosed;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Error};
use tracing::{debug, error, info, warn};
use url::Url;

use crate::metrics::Metrics;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Single-connection flashblocks consumer.
///
/// Owns one websocket connection and invokes the handler for every flashblock
/// decoded from it. Decode and parse failures are logged and skipped; there is
/// no reconnection, a stream that ends takes the subscriber down with it.
pub struct FlashblocksSubscriber<F>
where
    F: Fn(Flashblock) + Send + Sync + 'static,
{
    url: Url,
    handler: F,
    metrics: Metrics,
}

impl<F> FlashblocksSubscriber<F>
where
    F: Fn(Flashblock) + Send + Sync + 'static,
{
    pub fn new(url: Url, handler: F, metrics: Metrics) -> Self {
        Self {
            url,
            handler,
            metrics,
        }
    }

    /// Connects and processes frames until the stream ends or the process is
    /// told to shut down.
    ///
    /// Failing to connect is fatal. Once connected, the reader runs on its own
    /// task; on SIGINT or SIGTERM a best-effort close frame is sent and the
    /// run finishes without waiting for the peer to acknowledge.
    pub async fn run(self) -> Result<()> {
        let Self {
            url,
            handler,
            metrics,
        } = self;

        info!(message = "connecting to flashblocks feed", url = %url);

        let (ws_stream, _) = connect_async(url.as_str())
            .await
            .map_err(|e| anyhow!("Failed to connect to {}: {}", url, e))?;

        info!(message = "connected, listening for flashblocks", url = %url);

        let (mut write, read) = ws_stream.split();

        let (done_tx, mut done_rx) = oneshot::channel();
        let reader_metrics = metrics.clone();

        tokio::spawn(async move {
            let result = Self::listen(read, &handler, &reader_metrics).await;
            let _ = done_tx.send(result);
        });

        tokio::select! {
            result = &mut done_rx => {
                match result {
                    Ok(Ok(())) => info!("Connection closed"),
                    Ok(Err(e)) => {
                        metrics.upstream_errors.increment(1);
                        error!(message = "stream ended with error", error = %e);
                    }
                    Err(_) => error!("Reader task dropped without reporting"),
                }
            }
            _ = shutdown_signal() => {
                info!("Shutdown signal received, closing connection...");
                let close = Message::Close(Some(CloseFrame {
                    code: CloseCode::Normal,
                    reason: "".into(),
                }));
                if let Err(e) = write.send(close).await {
                    warn!(message = "failed to send close frame", error = %e);
                }
            }
        }

        Ok(())
    }

    async fn listen(
        mut read: SplitStream<WsStream>,
        handler: &F,
        metrics: &Metrics,
    ) -> Result<(), Error> {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    metrics.frames_received.increment(1);
                    Self::process_frame(FrameKind::Text, text.as_bytes(), handler, metrics);
                }
                Ok(Message::Binary(data)) => {
                    metrics.frames_received.increment(1);
                    Self::process_frame(FrameKind::Binary, &data, handler, metrics);
                }
                Ok(Message::Close(frame)) => {
                    info!(message = "received close frame from upstream", frame = ?frame);
                    return Ok(());
                }
                Ok(other) => {
                    debug!(message = "skipping non-payload frame", frame = ?other);
                }
                Err(ConnectionClosed) => return Ok(()),
                Err(e) => {
                    error!(message = "error reading from stream", error = %e);
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    fn process_frame(kind: FrameKind, raw: &[u8], handler: &F, metrics: &Metrics) {
        match Flashblock::try_decode(kind, raw) {
            Ok(flashblock) => {
                metrics.flashblocks_decoded.increment(1);
                handler(flashblock);
            }
            Err(FlashblockDecodeError::Decompress(e)) => {
                metrics.decode_errors.increment(1);
                warn!(message = "failed to decompress binary frame", input_len = e.input_len, error = %e);
            }
            Err(FlashblockDecodeError::PayloadParse(e)) => {
                metrics.parse_errors.increment(1);
                warn!(message = "failed to parse flashblock payload", raw = %e.raw_lossy(), error = %e);
            }
        }
    }
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT (Ctrl+C)"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
