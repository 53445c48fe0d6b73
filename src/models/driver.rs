use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub avg_delivery_time: String,
    /// Percentage in `[0, 100]`.
    pub completion_rate: f64,
    /// Stars in `[0, 5]`.
    pub rating: f64,
    pub total_deliveries: u32,
}
