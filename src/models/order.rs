use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::recipient::Recipient;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderStatus {
    Pending,
    Paid,
    Processing,
    Dispatched,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Processing,
        OrderStatus::Dispatched,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Processing => "Processing",
            OrderStatus::Dispatched => "Dispatched",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }

    /// Next state reached by a plain advance. `None` once the order has been
    /// dispatched or has left the lifecycle.
    pub fn successor(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Paid),
            OrderStatus::Paid => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Dispatched),
            OrderStatus::Dispatched
            | OrderStatus::Delivered
            | OrderStatus::Cancelled
            | OrderStatus::Refunded => None,
        }
    }

    /// Status an order moves to once a driver is attached to it.
    pub fn after_driver_assignment(&self) -> OrderStatus {
        match self {
            OrderStatus::Paid | OrderStatus::Processing => OrderStatus::Dispatched,
            other => *other,
        }
    }

    /// Orders the Bissau hub can hand to a courier or is already delivering.
    pub fn is_dispatchable(&self) -> bool {
        matches!(
            self,
            OrderStatus::Paid | OrderStatus::Processing | OrderStatus::Dispatched
        )
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn counts_as_revenue(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled | OrderStatus::Refunded)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown order status: {s}"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price_gbp: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub recipient: Recipient,
    pub items: Vec<OrderItem>,
    pub total_gbp: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub payment_ref: String,
    pub notes: Option<String>,
    pub is_flagged: bool,
    pub driver_name: Option<String>,
    pub proof_of_delivery: Option<String>,
    pub tracking_id: Option<String>,
    pub tracking_url: Option<String>,
}

impl Order {
    /// Case-insensitive match on the identifiers an operator searches by.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            self.id.as_str(),
            self.order_number.as_str(),
            self.customer_name.as_str(),
            self.recipient.name.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::OrderStatus;

    #[test]
    fn advance_walks_the_forward_lifecycle() {
        assert_eq!(OrderStatus::Pending.successor(), Some(OrderStatus::Paid));
        assert_eq!(OrderStatus::Paid.successor(), Some(OrderStatus::Processing));
        assert_eq!(
            OrderStatus::Processing.successor(),
            Some(OrderStatus::Dispatched)
        );
        assert_eq!(OrderStatus::Dispatched.successor(), None);
        assert_eq!(OrderStatus::Delivered.successor(), None);
        assert_eq!(OrderStatus::Cancelled.successor(), None);
        assert_eq!(OrderStatus::Refunded.successor(), None);
    }

    #[test]
    fn driver_assignment_only_dispatches_paid_or_processing() {
        for status in OrderStatus::ALL {
            let expected = match status {
                OrderStatus::Paid | OrderStatus::Processing => OrderStatus::Dispatched,
                other => other,
            };
            assert_eq!(status.after_driver_assignment(), expected, "{status}");
        }
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("dispatched".parse::<OrderStatus>(), Ok(OrderStatus::Dispatched));
        assert_eq!(" Refunded ".parse::<OrderStatus>(), Ok(OrderStatus::Refunded));
        assert!("Shipped".parse::<OrderStatus>().is_err());
    }
}
