use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;

use crate::error::AppError;
use crate::insights::Insight;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/insights/ops", get(latest_ops).post(refresh_ops))
        .route("/orders/:id/risk", get(order_risk))
}

async fn latest_ops(State(state): State<Arc<AppState>>) -> Json<Option<Insight>> {
    Json(state.insights.latest_ops_insights())
}

async fn refresh_ops(State(state): State<Arc<AppState>>) -> Json<Insight> {
    let orders = state.orders.list();
    let inventory = state.inventory.list();
    Json(state.insights.ops_insights(&orders, &inventory).await)
}

async fn order_risk(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Insight>, AppError> {
    let order = state.orders.get(&id)?;
    Ok(Json(state.insights.fraud_risk(&order).await))
}
