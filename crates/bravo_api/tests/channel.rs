use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

use bravo_api::{
    BravoApiConfig, ChannelState, PlanStep, ReconnectPolicy, SessionChannel, SessionFrame,
    StepStatus,
};

async fn scripted_stream_server(frames: Vec<&'static str>) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("local listener should bind");
    let addr = listener.local_addr().expect("resolved listener address");
    let base_url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept stream connection");
        let mut socket = accept_async(stream).await.expect("websocket handshake");
        for frame in frames {
            socket
                .send(Message::Text(frame.to_string()))
                .await
                .expect("send scripted frame");
        }
        let _ = socket.close(None).await;
        while let Some(message) = socket.next().await {
            if message.is_err() {
                break;
            }
        }
    });

    (base_url, handle)
}

async fn holding_server() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("local listener should bind");
    let addr = listener.local_addr().expect("resolved listener address");
    let base_url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept stream connection");
        let mut socket = accept_async(stream).await.expect("websocket handshake");
        while let Some(Ok(_)) = socket.next().await {}
    });

    (base_url, handle)
}

#[tokio::test]
async fn channel_delivers_decoded_frames_in_arrival_order() {
    let (base_url, server) = scripted_stream_server(vec![
        r#"{"type":"thought","content":"reading the request"}"#,
        r#"{"type":"plan","steps":[{"id":"1","text":"step one","status":"pending"}]}"#,
        r#"{"type":"telemetry","content":"dropped"}"#,
        "not json at all",
        r#"{"type":"terminal_output","content":"line1"}"#,
        r#"{"type":"task_complete"}"#,
    ])
    .await;

    let config = BravoApiConfig::new().with_base_url(base_url);
    let mut channel = SessionChannel::connect(&config, "session-1");

    let mut received = Vec::new();
    while let Some(frame) = channel.next_frame().await {
        received.push(frame);
    }

    assert_eq!(
        received,
        vec![
            SessionFrame::Thought {
                content: "reading the request".to_string(),
            },
            SessionFrame::Plan {
                steps: vec![PlanStep {
                    id: "1".to_string(),
                    text: "step one".to_string(),
                    status: StepStatus::Pending,
                }],
            },
            SessionFrame::TerminalOutput {
                content: "line1".to_string(),
            },
            SessionFrame::TaskComplete,
        ]
    );
    assert_eq!(channel.state(), ChannelState::Closed);

    server.await.expect("server task completes");
}

#[tokio::test]
async fn connect_failure_is_observable_not_fatal() {
    // Nothing listens on the discard port; the channel must absorb the
    // failure and report a closed state instead of erroring.
    let config = BravoApiConfig::new().with_base_url("http://127.0.0.1:9");
    let mut channel = SessionChannel::connect(&config, "session-1");

    assert_eq!(channel.next_frame().await, None);
    assert_eq!(channel.state(), ChannelState::Closed);
}

#[tokio::test]
async fn close_releases_the_connection_exactly_once() {
    let (base_url, server) = holding_server().await;
    let config = BravoApiConfig::new().with_base_url(base_url);
    let mut channel = SessionChannel::connect(&config, "session-1");

    assert_eq!(channel.ready().await, ChannelState::Open);

    channel.close();
    channel.close();

    assert_eq!(channel.next_frame().await, None);
    assert_eq!(channel.state(), ChannelState::Closed);

    server.await.expect("server task completes");
}

#[tokio::test]
async fn disabled_reconnect_goes_inert_after_server_close() {
    let (base_url, server) = scripted_stream_server(Vec::new()).await;
    let config = BravoApiConfig::new().with_base_url(base_url);
    let mut channel = SessionChannel::connect(&config, "session-1");

    assert_eq!(channel.next_frame().await, None);
    assert_eq!(channel.state(), ChannelState::Closed);

    server.await.expect("server task completes");
}

#[tokio::test]
async fn retry_policy_gives_up_after_configured_attempts() {
    let config = BravoApiConfig::new()
        .with_base_url("http://127.0.0.1:9")
        .with_reconnect(ReconnectPolicy::Retry {
            max_attempts: 2,
            base_delay: Duration::from_millis(5),
        });
    let mut channel = SessionChannel::connect(&config, "session-1");

    assert_eq!(channel.next_frame().await, None);
    assert_eq!(channel.state(), ChannelState::Closed);
}
