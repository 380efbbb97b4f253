//! Item entity - a single record in the shared item collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, ItemId};

/// A single item in the collection.
///
/// Timestamps are supplied by the caller (the engine injects a clock
/// port) so that entity behavior stays deterministic under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item with both timestamps set to `now`.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        completed: bool,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: ItemId::new(),
            title,
            description,
            completed,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the mutable fields, refreshing `updated_at` only.
    pub fn apply(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        completed: bool,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        self.description = description;
        self.completed = completed;
        self.updated_at = now;
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("Item title cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        "2024-05-01T12:00:00Z".parse().expect("valid timestamp")
    }

    #[test]
    fn new_item_stamps_both_timestamps() {
        let item = Item::new("Buy milk", None, false, now()).expect("valid item");

        assert_eq!(item.title, "Buy milk");
        assert_eq!(item.description, None);
        assert!(!item.completed);
        assert_eq!(item.created_at, now());
        assert_eq!(item.updated_at, now());
    }

    #[test]
    fn new_item_rejects_blank_title() {
        let result = Item::new("   ", None, false, now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn apply_refreshes_updated_at_and_keeps_created_at() {
        let mut item = Item::new("Buy milk", None, false, now()).expect("valid item");
        let later = now() + chrono::Duration::minutes(5);

        item.apply("Buy oat milk", Some("2 liters".to_string()), true, later)
            .expect("valid update");

        assert_eq!(item.title, "Buy oat milk");
        assert_eq!(item.description.as_deref(), Some("2 liters"));
        assert!(item.completed);
        assert_eq!(item.created_at, now());
        assert_eq!(item.updated_at, later);
    }

    #[test]
    fn apply_rejects_blank_title_without_mutating() {
        let mut item = Item::new("Buy milk", None, false, now()).expect("valid item");
        let before = item.clone();

        let result = item.apply("", None, true, now());

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(item, before);
    }
}
