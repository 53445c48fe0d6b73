use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use serde::Deserialize;

use crate::engine::analytics;
use crate::error::AppError;
use crate::models::activity::ActivityEntry;
use crate::models::customer::{Customer, CustomerProfile, CustomerStatus};
use crate::models::driver::Driver;
use crate::models::recipient::{Recipient, SaveOutcome, SavedRecipient};
use crate::models::staff::{NewStaffMember, StaffMember, StaffStatus};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/drivers", get(list_drivers))
        .route("/recipients", get(list_recipients).post(save_recipient))
        .route("/staff", get(list_staff).post(add_staff))
        .route("/staff/:id/status", patch(set_staff_status))
        .route("/customers", get(list_customers))
        .route("/customers/:id", get(customer_profile))
        .route("/customers/:id/status", patch(set_customer_status))
        .route("/activity", get(list_activity))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct ActivityQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct SaveRecipientRequest {
    pub recipient: Recipient,
    pub customer_name: String,
}

#[derive(Deserialize)]
pub struct StaffStatusRequest {
    pub status: StaffStatus,
}

#[derive(Deserialize)]
pub struct CustomerStatusRequest {
    pub status: CustomerStatus,
}

async fn list_drivers(State(state): State<Arc<AppState>>) -> Json<Vec<Driver>> {
    Json(state.drivers.list())
}

async fn list_recipients(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<SavedRecipient>> {
    let recipients = match query.q.as_deref() {
        Some(term) => state.recipients.search(term),
        None => state.recipients.list(),
    };
    Json(recipients)
}

async fn save_recipient(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SaveRecipientRequest>,
) -> Result<(StatusCode, Json<SaveOutcome>), AppError> {
    let outcome = state
        .back_office
        .save_recipient(payload.recipient, &payload.customer_name)?;

    let status = if outcome.is_saved() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome)))
}

async fn list_staff(State(state): State<Arc<AppState>>) -> Json<Vec<StaffMember>> {
    Json(state.staff.list())
}

async fn add_staff(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewStaffMember>,
) -> Result<(StatusCode, Json<StaffMember>), AppError> {
    let member = state.back_office.add_staff(payload)?;
    Ok((StatusCode::CREATED, Json(member)))
}

async fn set_staff_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<StaffStatusRequest>,
) -> Result<Json<StaffMember>, AppError> {
    Ok(Json(state.back_office.set_staff_status(&id, payload.status)?))
}

async fn list_customers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Customer>> {
    let customers = match query.q.as_deref() {
        Some(term) => state.customers.search(term),
        None => state.customers.list(),
    };
    Json(customers)
}

async fn customer_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CustomerProfile>, AppError> {
    let customer = state.customers.get(&id)?;
    let recipients = state.recipients.for_customer(&customer.name);

    Ok(Json(analytics::customer_profile(
        customer,
        &state.orders.list(),
        recipients,
    )))
}

async fn set_customer_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<CustomerStatusRequest>,
) -> Result<Json<Customer>, AppError> {
    Ok(Json(
        state.back_office.set_customer_status(&id, payload.status)?,
    ))
}

async fn list_activity(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActivityQuery>,
) -> Json<Vec<ActivityEntry>> {
    Json(state.activity.entries(query.limit))
}
