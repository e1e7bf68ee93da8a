use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use crate::config::BravoApiConfig;
use crate::frames::{decode_frame, SessionFrame};
use crate::url::websocket_url;

/// Reconnect behavior for a dropped session stream.
///
/// The backend treats a disconnected session as inert, so the default is
/// `Disabled`; automatic retry is an opt-in extension point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReconnectPolicy {
    #[default]
    Disabled,
    Retry {
        max_attempts: u32,
        base_delay: Duration,
    },
}

/// Observable lifecycle of one session stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Connecting,
    Open,
    Closed,
}

/// One streaming connection to a session-scoped backend endpoint.
///
/// The channel owns a reader task that decodes inbound text frames and
/// forwards them, in arrival order, through an unbounded queue. It is closed
/// exactly once: explicitly via [`SessionChannel::close`] or implicitly on
/// drop, whichever comes first.
pub struct SessionChannel {
    frames: mpsc::UnboundedReceiver<SessionFrame>,
    state: watch::Receiver<ChannelState>,
    shutdown: Option<oneshot::Sender<()>>,
    reader: Option<JoinHandle<()>>,
}

impl SessionChannel {
    /// Open the stream for a session.
    ///
    /// Connection failures never surface as errors here; they are observable
    /// as [`ChannelState::Closed`] and an exhausted frame queue.
    pub fn connect(config: &BravoApiConfig, session_id: &str) -> Self {
        let url = websocket_url(&config.base_url, session_id);
        let (frame_tx, frames) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(ChannelState::Connecting);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let reader = tokio::spawn(run_reader(
            url,
            config.reconnect,
            frame_tx,
            state_tx,
            shutdown_rx,
        ));

        Self {
            frames,
            state,
            shutdown: Some(shutdown_tx),
            reader: Some(reader),
        }
    }

    /// Next decoded frame in arrival order; `None` once the stream finishes.
    pub async fn next_frame(&mut self) -> Option<SessionFrame> {
        self.frames.recv().await
    }

    pub fn state(&self) -> ChannelState {
        *self.state.borrow()
    }

    /// Wait until the channel leaves the `Connecting` state.
    pub async fn ready(&mut self) -> ChannelState {
        loop {
            let current = *self.state.borrow();
            if current != ChannelState::Connecting {
                return current;
            }
            if self.state.changed().await.is_err() {
                return *self.state.borrow();
            }
        }
    }

    /// Release the connection. Idempotent; also runs on drop so the stream is
    /// never leaked past the owning view's lifetime.
    pub fn close(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

impl Drop for SessionChannel {
    fn drop(&mut self) {
        self.close();
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
    }
}

enum ReaderExit {
    Shutdown,
    Dropped,
}

async fn run_reader(
    url: String,
    reconnect: ReconnectPolicy,
    frames: mpsc::UnboundedSender<SessionFrame>,
    state: watch::Sender<ChannelState>,
    mut shutdown: oneshot::Receiver<()>,
) {
    let mut attempt = 0u32;

    loop {
        let _ = state.send(ChannelState::Connecting);
        let connected = tokio::select! {
            result = connect_async(url.as_str()) => result,
            _ = &mut shutdown => break,
        };

        let mut socket = match connected {
            Ok((socket, _response)) => socket,
            Err(error) => {
                warn!(%error, url = %url, "session stream connect failed");
                let Some(delay) = next_retry(reconnect, &mut attempt) else {
                    break;
                };
                if wait_for_retry(delay, &mut shutdown).await {
                    continue;
                }
                break;
            }
        };

        info!(url = %url, "session stream open");
        let _ = state.send(ChannelState::Open);
        attempt = 0;

        let exit = loop {
            let message = tokio::select! {
                message = socket.next() => message,
                _ = &mut shutdown => break ReaderExit::Shutdown,
            };

            match message {
                Some(Ok(Message::Text(text))) => {
                    if let Some(frame) = decode_frame(&text) {
                        if frames.send(frame).is_err() {
                            // Receiver side is gone; nothing left to feed.
                            break ReaderExit::Shutdown;
                        }
                    }
                }
                Some(Ok(Message::Ping(payload))) => {
                    let _ = socket.send(Message::Pong(payload)).await;
                }
                Some(Ok(Message::Close(_))) | None => break ReaderExit::Dropped,
                Some(Ok(other)) => {
                    debug!(?other, "ignoring non-text session stream message");
                }
                Some(Err(error)) => {
                    warn!(%error, "session stream error");
                    break ReaderExit::Dropped;
                }
            }
        };

        match exit {
            ReaderExit::Shutdown => {
                let _ = socket.close(None).await;
                break;
            }
            ReaderExit::Dropped => {
                let Some(delay) = next_retry(reconnect, &mut attempt) else {
                    break;
                };
                if !wait_for_retry(delay, &mut shutdown).await {
                    break;
                }
            }
        }
    }

    let _ = state.send(ChannelState::Closed);
    info!(url = %url, "session stream closed");
}

fn next_retry(policy: ReconnectPolicy, attempt: &mut u32) -> Option<Duration> {
    match policy {
        ReconnectPolicy::Disabled => None,
        ReconnectPolicy::Retry {
            max_attempts,
            base_delay,
        } => {
            if *attempt >= max_attempts {
                return None;
            }
            let exponent = (*attempt).min(16);
            let delay = base_delay.saturating_mul(2u32.saturating_pow(exponent));
            *attempt += 1;
            Some(delay)
        }
    }
}

async fn wait_for_retry(delay: Duration, shutdown: &mut oneshot::Receiver<()>) -> bool {
    tokio::select! {
        () = tokio::time::sleep(delay) => true,
        _ = &mut *shutdown => false,
    }
}
