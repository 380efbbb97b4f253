//! REST request bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/items` and `PUT /api/items/{id}`.
///
/// An update is a full replacement of the mutable fields, so the create
/// body doubles as the update body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}
