use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use serde::Deserialize;

use crate::engine::analytics;
use crate::error::AppError;
use crate::models::order::{Order, OrderStatus};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/flagged", get(list_flagged))
        .route("/orders/dispatchable", get(list_dispatchable))
        .route("/orders/:id", get(get_order))
        .route("/orders/:id/advance", post(advance_order))
        .route("/orders/:id/driver", post(assign_driver))
        .route("/orders/:id/tracking", put(set_tracking))
        .route("/orders/:id/complete", post(complete_delivery))
        .route("/orders/:id/cancel", post(cancel_order))
        .route("/orders/:id/status", put(set_status))
}

#[derive(Deserialize)]
pub struct OrderQuery {
    pub q: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct AssignDriverRequest {
    pub driver: String,
}

#[derive(Deserialize)]
pub struct TrackingRequest {
    pub tracking_id: String,
}

#[derive(Deserialize, Default)]
pub struct CompleteDeliveryRequest {
    pub proof_of_delivery: Option<String>,
}

#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: OrderStatus,
}

async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Vec<Order>>, AppError> {
    let status = query
        .status
        .as_deref()
        .filter(|raw| !raw.is_empty() && !raw.eq_ignore_ascii_case("all"))
        .map(str::parse::<OrderStatus>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    Ok(Json(analytics::filter_orders(
        state.orders.list(),
        query.q.as_deref(),
        status,
    )))
}

async fn list_flagged(State(state): State<Arc<AppState>>) -> Json<Vec<Order>> {
    Json(analytics::flagged(state.orders.list()))
}

async fn list_dispatchable(State(state): State<Arc<AppState>>) -> Json<Vec<Order>> {
    Json(analytics::dispatchable(state.orders.list()))
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    Ok(Json(state.orders.get(&id)?))
}

async fn advance_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    Ok(Json(state.dispatch.advance_status(&id)?))
}

async fn assign_driver(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<AssignDriverRequest>,
) -> Result<Json<Order>, AppError> {
    Ok(Json(state.dispatch.assign_driver(&id, &payload.driver)?))
}

async fn set_tracking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<TrackingRequest>,
) -> Result<Json<Order>, AppError> {
    Ok(Json(state.dispatch.set_tracking(&id, &payload.tracking_id)?))
}

async fn complete_delivery(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Option<Json<CompleteDeliveryRequest>>,
) -> Result<Json<Order>, AppError> {
    let Json(payload) = payload.unwrap_or_default();
    Ok(Json(
        state.dispatch.complete_delivery(&id, payload.proof_of_delivery)?,
    ))
}

async fn cancel_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    Ok(Json(state.dispatch.cancel(&id)?))
}

async fn set_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<StatusRequest>,
) -> Result<Json<Order>, AppError> {
    Ok(Json(state.dispatch.set_status(&id, payload.status)?))
}
