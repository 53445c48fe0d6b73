use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::order::Order;
use crate::models::recipient::SavedRecipient;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CustomerStatus {
    Active,
    Blocked,
}

/// Paying expat customer abroad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub status: CustomerStatus,
    pub total_orders: u32,
    pub total_spent_gbp: f64,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipientHistory {
    pub recipient: SavedRecipient,
    pub orders_received: usize,
    pub total_received_gbp: f64,
    pub last_order_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerProfile {
    pub customer: Customer,
    pub orders: Vec<Order>,
    pub recipients: Vec<RecipientHistory>,
}
