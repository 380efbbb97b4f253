//! WebSocket handling for client connections.
//!
//! One handler task per connection: register with the connection
//! manager on open, pump inbound messages until disconnect, unregister
//! on any exit path. Inbound text is echoed back on the same connection
//! only; item events arrive through the connection's outbound channel.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, Utf8Bytes, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use taskwire_domain::ConnectionId;

use super::ApiState;

/// Buffer size for per-connection message channel. A peer that falls
/// this far behind is treated as dead and evicted on the next broadcast.
const CONNECTION_CHANNEL_BUFFER: usize = 256;

/// WebSocket upgrade handler - entry point for new connections.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<ApiState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an individual WebSocket connection.
async fn handle_socket(socket: WebSocket, state: Arc<ApiState>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let connection_id = ConnectionId::new();

    // Create a bounded channel for sending messages to this client
    let (tx, mut rx) = mpsc::channel::<Utf8Bytes>(CONNECTION_CHANNEL_BUFFER);

    // Register the connection
    state.connections.register(connection_id, tx.clone()).await;

    tracing::info!(connection_id = %connection_id, "WebSocket connection established");

    // Spawn a task to forward messages from the channel to the WebSocket
    let send_task = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if ws_sender.send(Message::Text(payload)).await.is_err() {
                break;
            }
        }
    });

    // Handle incoming messages
    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(Message::Text(text)) => {
                let reply: Utf8Bytes = format!("Message received: {}", text.as_str()).into();
                if tx.try_send(reply).is_err() {
                    tracing::warn!(
                        connection_id = %connection_id,
                        "Outbound channel full or closed, dropping connection"
                    );
                    break;
                }
            }
            Ok(Message::Close(_)) => {
                tracing::info!(connection_id = %connection_id, "WebSocket closed by client");
                break;
            }
            Err(e) => {
                tracing::error!(connection_id = %connection_id, error = %e, "WebSocket error");
                break;
            }
            // Binary frames are ignored; Ping/Pong is answered at the
            // transport layer.
            _ => {}
        }
    }

    // Clean up. Unregister is idempotent, so racing a broadcast-side
    // eviction of this same connection is fine.
    state.connections.unregister(connection_id).await;
    send_task.abort();

    tracing::info!(connection_id = %connection_id, "WebSocket connection terminated");
}
