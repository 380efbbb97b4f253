//! Domain-to-wire event mapping.
//!
//! Wraps each committed item mutation into its wire envelope and hands
//! it to the connection manager. Only call [`publish`] after the store
//! mutation committed; a failed mutation must never produce an event.

use taskwire_domain::{Item, ItemEvent};
use taskwire_shared::{ItemDto, ServerMessage};

use super::connections::{ConnectionManager, DeliveryReport};

/// Wire snapshot of an item.
pub fn item_dto(item: &Item) -> ItemDto {
    ItemDto {
        id: item.id.to_uuid(),
        title: item.title.clone(),
        description: item.description.clone(),
        completed: item.completed,
        created_at: item.created_at,
        updated_at: item.updated_at,
    }
}

/// Map a committed mutation to its wire envelope.
pub fn server_message(event: &ItemEvent) -> ServerMessage {
    match event {
        ItemEvent::Created(item) => ServerMessage::ItemCreated {
            item: item_dto(item),
        },
        ItemEvent::Updated(item) => ServerMessage::ItemUpdated {
            item: item_dto(item),
        },
        ItemEvent::Deleted(id) => ServerMessage::ItemDeleted {
            item_id: id.to_uuid(),
        },
    }
}

/// Broadcast a committed mutation to every connected client.
///
/// Best-effort: per-connection failures are already handled inside the
/// broadcast (eviction); the report only feeds observability.
pub async fn publish(connections: &ConnectionManager, event: ItemEvent) -> DeliveryReport {
    let message = server_message(&event);
    let report = connections.broadcast(&message, None).await;
    tracing::debug!(
        item_id = %event.item_id(),
        attempted = report.attempted,
        delivered = report.delivered,
        evicted = report.evicted,
        "Published item event"
    );
    report
}
