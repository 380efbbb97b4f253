//! Application state and composition.

use std::sync::Arc;

use crate::entities::Items;
use crate::infrastructure::ports::{ClockPort, ItemRepo};

/// Main application state.
///
/// Holds the entity operation modules. Passed to HTTP/WebSocket handlers
/// via Axum state.
pub struct App {
    pub items: Items,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(item_repo: Arc<dyn ItemRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            items: Items::new(item_repo, clock),
        }
    }
}
