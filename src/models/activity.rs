use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub target_id: Option<String>,
}

/// Staff identity stamped on every activity entry written by this console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operator {
    pub id: String,
    pub name: String,
}
