use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::inventory::InventoryItem;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/inventory", get(list_inventory).post(add_sku))
        .route("/inventory/low-stock", get(low_stock))
        .route("/inventory/:id", put(update_sku))
}

#[derive(Deserialize)]
pub struct InventoryQuery {
    pub q: Option<String>,
}

async fn list_inventory(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InventoryQuery>,
) -> Json<Vec<InventoryItem>> {
    let items = match query.q.as_deref() {
        Some(term) => state.inventory.search(term),
        None => state.inventory.list(),
    };
    Json(items)
}

async fn low_stock(State(state): State<Arc<AppState>>) -> Json<Vec<InventoryItem>> {
    Json(state.inventory.low_stock())
}

async fn add_sku(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<InventoryItem>,
) -> Result<(StatusCode, Json<InventoryItem>), AppError> {
    let item = state.back_office.add_sku(payload)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_sku(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryItem>,
) -> Result<Json<InventoryItem>, AppError> {
    if payload.id != id {
        return Err(AppError::BadRequest(format!(
            "sku id {} does not match path {id}",
            payload.id
        )));
    }
    Ok(Json(state.back_office.update_sku(payload)?))
}
