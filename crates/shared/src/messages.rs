//! WebSocket message types for Engine-client communication
//!
//! The Engine pushes one `ServerMessage` per committed item mutation to
//! every connected client. Inbound client traffic is free-form text and
//! has no structured type here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::ItemDto;

// =============================================================================
// Server Messages (Engine → client)
// =============================================================================

/// Messages from server (Engine) to connected clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// An item was created
    ItemCreated { item: ItemDto },
    /// An item was updated; `item` reflects the post-mutation state
    ItemUpdated { item: ItemDto },
    /// An item was deleted; only the id remains
    ItemDeleted { item_id: Uuid },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_dto() -> ItemDto {
        ItemDto {
            id: "6f8a2c1e-9b4d-4e2a-8f0c-3d5e7a9b1c2d".parse().expect("valid uuid"),
            title: "Buy milk".to_string(),
            description: None,
            completed: false,
            created_at: "2024-05-01T12:00:00Z".parse().expect("valid timestamp"),
            updated_at: "2024-05-01T12:00:00Z".parse().expect("valid timestamp"),
        }
    }

    #[test]
    fn item_created_wire_format() {
        let msg = ServerMessage::ItemCreated { item: sample_dto() };
        let value = serde_json::to_value(&msg).expect("serialize");

        assert_eq!(
            value,
            json!({
                "type": "item_created",
                "item": {
                    "id": "6f8a2c1e-9b4d-4e2a-8f0c-3d5e7a9b1c2d",
                    "title": "Buy milk",
                    "description": null,
                    "completed": false,
                    "created_at": "2024-05-01T12:00:00Z",
                    "updated_at": "2024-05-01T12:00:00Z",
                }
            })
        );
    }

    #[test]
    fn item_updated_wire_format_carries_description() {
        let mut dto = sample_dto();
        dto.description = Some("2 liters".to_string());
        dto.completed = true;

        let msg = ServerMessage::ItemUpdated { item: dto };
        let value = serde_json::to_value(&msg).expect("serialize");

        assert_eq!(value["type"], "item_updated");
        assert_eq!(value["item"]["description"], "2 liters");
        assert_eq!(value["item"]["completed"], true);
    }

    #[test]
    fn item_deleted_wire_format_is_id_only() {
        let msg = ServerMessage::ItemDeleted {
            item_id: "6f8a2c1e-9b4d-4e2a-8f0c-3d5e7a9b1c2d".parse().expect("valid uuid"),
        };
        let value = serde_json::to_value(&msg).expect("serialize");

        assert_eq!(
            value,
            json!({
                "type": "item_deleted",
                "item_id": "6f8a2c1e-9b4d-4e2a-8f0c-3d5e7a9b1c2d",
            })
        );
    }

    #[test]
    fn server_message_round_trips() {
        let msg = ServerMessage::ItemCreated { item: sample_dto() };
        let json = serde_json::to_string(&msg).expect("serialize");
        let parsed: ServerMessage = serde_json::from_str(&json).expect("deserialize");
        assert!(matches!(parsed, ServerMessage::ItemCreated { item } if item == sample_dto()));
    }
}
