//! HTTP routes.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use taskwire_domain::{DomainError, ItemEvent, ItemId};
use taskwire_shared::{CreateItem, ItemDto};

use super::{events, ApiState};
use crate::entities::ItemError;
use crate::infrastructure::ports::RepoError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Taskwire Engine",
        "status": "running",
    }))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_items(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<ItemDto>>, ApiError> {
    let items = state.app.items.list().await?;
    Ok(Json(items.iter().map(events::item_dto).collect()))
}

async fn get_item(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItemDto>, ApiError> {
    let item = state.app.items.get(ItemId::from_uuid(id)).await?;
    Ok(Json(events::item_dto(&item)))
}

async fn create_item(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<CreateItem>,
) -> Result<Json<ItemDto>, ApiError> {
    let item = state
        .app
        .items
        .create(body.title, body.description, body.completed)
        .await?;
    let dto = events::item_dto(&item);
    events::publish(&state.connections, ItemEvent::Created(item)).await;
    Ok(Json(dto))
}

async fn update_item(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateItem>,
) -> Result<Json<ItemDto>, ApiError> {
    let item = state
        .app
        .items
        .update(
            ItemId::from_uuid(id),
            body.title,
            body.description,
            body.completed,
        )
        .await?;
    let dto = events::item_dto(&item);
    events::publish(&state.connections, ItemEvent::Updated(item)).await;
    Ok(Json(dto))
}

async fn delete_item(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let removed = state.app.items.delete(ItemId::from_uuid(id)).await?;
    events::publish(&state.connections, ItemEvent::Deleted(removed.id)).await;
    Ok(Json(serde_json::json!({
        "message": "Item deleted successfully",
    })))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (axum::http::StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(_) => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            )
                .into_response(),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        if e.is_not_found() {
            ApiError::NotFound
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(e: ItemError) -> Self {
        match e {
            ItemError::Domain(DomainError::Validation(msg)) => ApiError::BadRequest(msg),
            ItemError::Domain(other) => ApiError::BadRequest(other.to_string()),
            ItemError::Repo(repo) => repo.into(),
        }
    }
}
