//! Item Routes
//!
//! Everything lives on `/`; the method picks the operation.
//!
//! - GET / - List all items
//! - POST / - Create an item from `{title, description}`
//! - PUT / - Toggle the item named by `{id}`
//! - GET /health - Liveness probe

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::model::{Item, NewItem, ToggleRequest};

/// GET /
///
/// List all items in insertion order.
pub async fn list_items(State(state): State<Arc<AppState>>) -> Json<Vec<Item>> {
    Json(state.store.list().await)
}

/// POST /
///
/// Create an item. Both fields must be non-empty.
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> ApiResult<Json<Item>> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    validate_new_item(&req)?;

    let item = state.store.add(req).await;
    tracing::info!(item_id = %item.id, title = %item.title, "Created item");

    Ok(Json(item))
}

/// PUT /
///
/// Flip the completion flag of one item.
pub async fn toggle_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> ApiResult<Json<Item>> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let item = state
        .store
        .toggle(&req.id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("todo with id {} not found", req.id)))?;

    tracing::info!(item_id = %item.id, completed = item.completed, "Toggled item");
    Ok(Json(item))
}

/// Health status body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub items: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        items: state.store.len().await,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn validate_new_item(req: &NewItem) -> ApiResult<()> {
    if req.title.is_empty() || req.description.is_empty() {
        return Err(ApiError::Validation(
            "title and description are required".to_string(),
        ));
    }
    Ok(())
}
