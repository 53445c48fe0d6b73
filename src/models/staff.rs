use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational site a staff member works from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hub {
    London,
    Bissau,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StaffRole {
    Admin,
    Accountant,
    #[serde(rename = "Warehouse Manager")]
    WarehouseManager,
    #[serde(rename = "Logistics Lead")]
    LogisticsLead,
    #[serde(rename = "Operations Specialist")]
    OperationsSpecialist,
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StaffRole::Admin => "Admin",
            StaffRole::Accountant => "Accountant",
            StaffRole::WarehouseManager => "Warehouse Manager",
            StaffRole::LogisticsLead => "Logistics Lead",
            StaffRole::OperationsSpecialist => "Operations Specialist",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StaffStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub hub: Hub,
    pub status: StaffStatus,
    pub last_login: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewStaffMember {
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub hub: Hub,
}
