//! API layer - HTTP and WebSocket entry points.

pub mod connections;
pub mod events;
pub mod http;
pub mod websocket;

pub use connections::{ConnectionManager, DeliveryReport};

use std::sync::Arc;

use crate::app::App;

/// Combined state for HTTP and WebSocket handlers.
///
/// The connection manager lives here rather than inside `App`: it is an
/// API-layer concern with a lifecycle tied to the server process, handed
/// by reference to whichever handler needs it.
pub struct ApiState {
    pub app: Arc<App>,
    pub connections: Arc<ConnectionManager>,
}
