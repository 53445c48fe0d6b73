use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::customer::{Customer, CustomerProfile, RecipientHistory};
use crate::models::inventory::InventoryItem;
use crate::models::order::{Order, OrderStatus};
use crate::models::recipient::SavedRecipient;
use crate::models::staff::{Hub, StaffMember, StaffRole, StaffStatus};

/// GBP to West African CFA franc, as quoted to Bissau staff.
pub const GBP_TO_XOF: f64 = 765.42;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_orders: usize,
    pub active_orders: usize,
    pub flagged_orders: usize,
    pub orders_by_status: BTreeMap<OrderStatus, usize>,
    pub revenue_gbp: f64,
    pub revenue_xof: f64,
    pub low_stock_skus: usize,
    pub customers: usize,
    pub active_staff: usize,
    pub staff_by_hub: BTreeMap<Hub, usize>,
    pub staff_by_role: BTreeMap<StaffRole, usize>,
}

pub fn summarize(
    orders: &[Order],
    inventory: &[InventoryItem],
    staff: &[StaffMember],
    customers: &[Customer],
) -> DashboardSummary {
    let mut orders_by_status = BTreeMap::new();
    for order in orders {
        *orders_by_status.entry(order.status).or_insert(0) += 1;
    }

    let revenue_gbp = round_pence(
        orders
            .iter()
            .filter(|order| order.status.counts_as_revenue())
            .map(|order| order.total_gbp)
            .sum(),
    );

    let mut staff_by_hub = BTreeMap::new();
    let mut staff_by_role = BTreeMap::new();
    for member in staff {
        *staff_by_hub.entry(member.hub).or_insert(0) += 1;
        *staff_by_role.entry(member.role).or_insert(0) += 1;
    }

    DashboardSummary {
        total_orders: orders.len(),
        active_orders: orders.iter().filter(|order| order.status.is_active()).count(),
        flagged_orders: orders.iter().filter(|order| order.is_flagged).count(),
        orders_by_status,
        revenue_gbp,
        revenue_xof: (revenue_gbp * GBP_TO_XOF).round(),
        low_stock_skus: inventory.iter().filter(|item| item.is_low_stock()).count(),
        customers: customers.len(),
        active_staff: staff
            .iter()
            .filter(|member| member.status == StaffStatus::Active)
            .count(),
        staff_by_hub,
        staff_by_role,
    }
}

pub fn filter_orders(orders: Vec<Order>, term: Option<&str>, status: Option<OrderStatus>) -> Vec<Order> {
    orders
        .into_iter()
        .filter(|order| term.is_none_or(|term| order.matches_search(term)))
        .filter(|order| status.is_none_or(|status| order.status == status))
        .collect()
}

pub fn flagged(orders: Vec<Order>) -> Vec<Order> {
    orders.into_iter().filter(|order| order.is_flagged).collect()
}

pub fn dispatchable(orders: Vec<Order>) -> Vec<Order> {
    orders
        .into_iter()
        .filter(|order| order.status.is_dispatchable())
        .collect()
}

/// Orders and recipients are linked to the customer by exact name match.
pub fn customer_profile(
    customer: Customer,
    orders: &[Order],
    recipients: Vec<SavedRecipient>,
) -> CustomerProfile {
    let customer_orders: Vec<Order> = orders
        .iter()
        .filter(|order| order.customer_name == customer.name)
        .cloned()
        .collect();

    let recipients = recipients
        .into_iter()
        .filter(|saved| saved.customer_name == customer.name)
        .map(|saved| {
            let received: Vec<&Order> = customer_orders
                .iter()
                .filter(|order| order.recipient.name == saved.recipient.name)
                .collect();

            RecipientHistory {
                orders_received: received.len(),
                total_received_gbp: round_pence(received.iter().map(|order| order.total_gbp).sum()),
                last_order_at: received.iter().map(|order| order.created_at).max(),
                recipient: saved,
            }
        })
        .collect();

    CustomerProfile {
        customer,
        orders: customer_orders,
        recipients,
    }
}

fn round_pence(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{GBP_TO_XOF, customer_profile, dispatchable, filter_orders, summarize};
    use crate::models::customer::{Customer, CustomerStatus};
    use crate::models::order::OrderStatus;
    use crate::models::recipient::SavedRecipient;
    use crate::store::orders::tests::order;

    #[test]
    fn summary_excludes_cancelled_and_refunded_revenue() {
        let mut orders = vec![
            order("o1", OrderStatus::Paid),
            order("o2", OrderStatus::Delivered),
            order("o3", OrderStatus::Cancelled),
            order("o4", OrderStatus::Refunded),
        ];
        orders[0].is_flagged = true;

        let summary = summarize(&orders, &[], &[], &[]);

        assert_eq!(summary.total_orders, 4);
        assert_eq!(summary.active_orders, 2);
        assert_eq!(summary.flagged_orders, 1);
        assert_eq!(summary.revenue_gbp, 140.0);
        assert_eq!(summary.revenue_xof, (140.0 * GBP_TO_XOF).round());
        assert_eq!(summary.orders_by_status.get(&OrderStatus::Cancelled), Some(&1));
    }

    #[test]
    fn search_matches_number_customer_and_recipient() {
        let mut other = order("o2", OrderStatus::Dispatched);
        other.customer_name = "Sarah Jalloh".to_string();
        other.recipient.name = "Ibrahim Jalloh".to_string();
        let orders = vec![order("o1", OrderStatus::Paid), other];

        assert_eq!(filter_orders(orders.clone(), Some("ibrahim"), None).len(), 1);
        assert_eq!(filter_orders(orders.clone(), Some("BX-o1"), None).len(), 1);
        assert_eq!(filter_orders(orders.clone(), Some(""), None).len(), 2);
        assert_eq!(
            filter_orders(orders.clone(), Some("jalloh"), Some(OrderStatus::Paid)).len(),
            0
        );
        assert_eq!(dispatchable(orders).len(), 2);
    }

    #[test]
    fn profile_links_by_exact_customer_name() {
        let customer = Customer {
            id: "c1".to_string(),
            name: "Kojo Mensah".to_string(),
            email: "kojo.mensah@example.co.uk".to_string(),
            phone: "+44 7700 900123".to_string(),
            country: "UK".to_string(),
            status: CustomerStatus::Active,
            total_orders: 12,
            total_spent_gbp: 840.5,
            joined_at: Utc::now(),
        };

        let first = order("o1", OrderStatus::Delivered);
        let mut second = order("o5", OrderStatus::Paid);
        second.created_at = first.created_at + Duration::days(1);
        let mut stranger = order("o6", OrderStatus::Paid);
        stranger.customer_name = "kojo mensah".to_string();

        let saved = SavedRecipient {
            id: "sr1".to_string(),
            recipient: first.recipient.clone(),
            customer_name: "Kojo Mensah".to_string(),
            added_at: Utc::now(),
        };

        let profile = customer_profile(
            customer,
            &[first, second.clone(), stranger],
            vec![saved],
        );

        assert_eq!(profile.orders.len(), 2);
        assert_eq!(profile.recipients.len(), 1);
        let history = &profile.recipients[0];
        assert_eq!(history.orders_received, 2);
        assert_eq!(history.total_received_gbp, 140.0);
        assert_eq!(history.last_order_at, Some(second.created_at));
    }
}
