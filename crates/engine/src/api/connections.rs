//! Connection management for WebSocket clients.
//!
//! Tracks every open client connection and fans committed item events
//! out to all of them. The registry is the one piece of state shared
//! between all connection handlers and the CRUD request paths, so every
//! read for broadcast goes through a snapshot: iteration never holds the
//! lock and can never race a concurrent register/unregister.

use std::collections::HashMap;

use axum::extract::ws::Utf8Bytes;
use tokio::sync::{mpsc, RwLock};

use taskwire_domain::ConnectionId;
use taskwire_shared::ServerMessage;

/// Sending half of a connection's outbound channel. Frames are
/// pre-serialized text so a broadcast serializes once, not per peer.
pub type ConnectionSender = mpsc::Sender<Utf8Bytes>;

/// Outcome of a single broadcast call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Connections a delivery was attempted to (excluded peers not counted).
    pub attempted: usize,
    /// Deliveries accepted by the peer's outbound channel.
    pub delivered: usize,
    /// Connections evicted from the registry during this call.
    pub evicted: usize,
}

/// Manages all active WebSocket connections.
pub struct ConnectionManager {
    connections: RwLock<HashMap<ConnectionId, ConnectionSender>>,
}

impl ConnectionManager {
    /// Create a new connection manager.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new connection.
    pub async fn register(&self, connection_id: ConnectionId, sender: ConnectionSender) {
        let mut connections = self.connections.write().await;
        connections.insert(connection_id, sender);
        tracing::debug!(
            connection_id = %connection_id,
            total = connections.len(),
            "Connection registered"
        );
    }

    /// Unregister a connection. Removing an unknown connection is a no-op,
    /// so the disconnect path and broadcast eviction can race freely.
    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut connections = self.connections.write().await;
        if connections.remove(&connection_id).is_some() {
            tracing::debug!(
                connection_id = %connection_id,
                total = connections.len(),
                "Connection unregistered"
            );
        }
    }

    /// Number of currently registered connections.
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Stable view of the registry at this instant. Senders are cheap
    /// handle clones; a connection closing mid-iteration just fails its
    /// send and takes the eviction path.
    async fn snapshot(&self) -> Vec<(ConnectionId, ConnectionSender)> {
        let connections = self.connections.read().await;
        connections
            .iter()
            .map(|(id, sender)| (*id, sender.clone()))
            .collect()
    }

    /// Broadcast a message to every registered connection, skipping
    /// `exclude` if given.
    ///
    /// Delivery is attempted independently per connection; a full or
    /// closed outbound channel fails only that peer and evicts it from
    /// the registry within this same call. Individual failures never
    /// surface to the caller beyond the report.
    pub async fn broadcast(
        &self,
        message: &ServerMessage,
        exclude: Option<ConnectionId>,
    ) -> DeliveryReport {
        let payload: Utf8Bytes = match serde_json::to_string(message) {
            Ok(json) => json.into(),
            Err(e) => {
                // Message types are plain data; failing here is a bug, not
                // a connection problem.
                tracing::error!(error = %e, "Failed to serialize broadcast message");
                return DeliveryReport::default();
            }
        };

        let mut report = DeliveryReport::default();
        let mut failed = Vec::new();

        for (connection_id, sender) in self.snapshot().await {
            if exclude == Some(connection_id) {
                continue;
            }
            report.attempted += 1;
            if sender.try_send(payload.clone()).is_ok() {
                report.delivered += 1;
            } else {
                failed.push(connection_id);
            }
        }

        if !failed.is_empty() {
            let mut connections = self.connections.write().await;
            for connection_id in failed {
                if connections.remove(&connection_id).is_some() {
                    report.evicted += 1;
                    tracing::warn!(
                        connection_id = %connection_id,
                        "Evicted unreachable connection during broadcast"
                    );
                }
            }
        }

        tracing::debug!(
            attempted = report.attempted,
            delivered = report.delivered,
            evicted = report.evicted,
            "Broadcast complete"
        );
        report
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}
