use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::error::AppError;
use crate::models::order::{Order, OrderStatus};

/// Result of applying a change to a single order.
#[derive(Debug, Clone)]
pub struct Mutation {
    pub order: Order,
    pub changed: bool,
}

#[derive(Default)]
pub struct OrderStore {
    orders: DashMap<String, Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intake path for seeded or externally created orders.
    pub fn insert(&self, order: Order) -> Result<(), AppError> {
        if order.id.trim().is_empty() {
            return Err(AppError::BadRequest("order id cannot be empty".to_string()));
        }
        if !order.total_gbp.is_finite() || order.total_gbp < 0.0 {
            return Err(AppError::BadRequest(format!(
                "order {} total must be a non-negative amount",
                order.id
            )));
        }

        match self.orders.entry(order.id.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "order {} already exists",
                order.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(order);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: &str) -> Result<Order, AppError> {
        self.orders
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))
    }

    /// Newest first.
    pub fn list(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn count_by_status(&self) -> BTreeMap<OrderStatus, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.orders.iter() {
            *counts.entry(entry.value().status).or_insert(0) += 1;
        }
        counts
    }

    /// Runs `apply` against a draft copy of the order while holding the entry
    /// lock. The draft is written back only when `apply` succeeds and reports a
    /// change; `updated_at` is then moved strictly forward.
    pub fn modify<F>(&self, id: &str, apply: F) -> Result<Mutation, AppError>
    where
        F: FnOnce(&mut Order) -> Result<bool, AppError>,
    {
        let mut entry = self
            .orders
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;

        let mut draft = entry.value().clone();
        let changed = apply(&mut draft)?;

        if changed {
            draft.updated_at = next_timestamp(entry.value().updated_at);
            *entry.value_mut() = draft.clone();
        }

        Ok(Mutation {
            order: draft,
            changed,
        })
    }
}

fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::{Duration, Utc};

    use super::OrderStore;
    use crate::error::AppError;
    use crate::models::order::{Order, OrderStatus};
    use crate::models::recipient::Recipient;

    pub(crate) fn order(id: &str, status: OrderStatus) -> Order {
        let created = Utc::now() - Duration::hours(1);
        Order {
            id: id.to_string(),
            order_number: format!("BX-{id}"),
            customer_name: "Kojo Mensah".to_string(),
            recipient: Recipient {
                name: "Maria Dinis".to_string(),
                location: "Bissau - Praça".to_string(),
                phone: "+245 95551234".to_string(),
            },
            items: Vec::new(),
            total_gbp: 70.0,
            status,
            created_at: created,
            updated_at: created,
            payment_ref: "STRIPE_1".to_string(),
            notes: None,
            is_flagged: false,
            driver_name: None,
            proof_of_delivery: None,
            tracking_id: None,
            tracking_url: None,
        }
    }

    #[test]
    fn insert_rejects_duplicates_and_negative_totals() {
        let store = OrderStore::new();
        store.insert(order("o1", OrderStatus::Paid)).unwrap();

        let duplicate = store.insert(order("o1", OrderStatus::Paid));
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));

        let mut negative = order("o2", OrderStatus::Paid);
        negative.total_gbp = -1.0;
        assert!(matches!(store.insert(negative), Err(AppError::BadRequest(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_modification_leaves_order_untouched() {
        let store = OrderStore::new();
        store.insert(order("o1", OrderStatus::Paid)).unwrap();
        let before = store.get("o1").unwrap();

        let result = store.modify("o1", |draft| {
            draft.status = OrderStatus::Delivered;
            Err(AppError::PreconditionFailed("nope".to_string()))
        });

        assert!(result.is_err());
        let after = store.get("o1").unwrap();
        assert_eq!(after.status, OrderStatus::Paid);
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[test]
    fn modification_moves_updated_at_forward_even_from_the_future() {
        let store = OrderStore::new();
        let mut future = order("o1", OrderStatus::Paid);
        future.updated_at = Utc::now() + Duration::hours(1);
        store.insert(future.clone()).unwrap();

        let applied = store
            .modify("o1", |draft| {
                draft.status = OrderStatus::Processing;
                Ok(true)
            })
            .unwrap();

        assert!(applied.changed);
        assert!(applied.order.updated_at > future.updated_at);
    }

    #[test]
    fn unknown_order_is_not_created_implicitly() {
        let store = OrderStore::new();
        let result = store.modify("ghost", |_| Ok(true));
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn list_is_newest_first() {
        let store = OrderStore::new();
        let mut older = order("a", OrderStatus::Paid);
        older.created_at = older.created_at - Duration::days(1);
        store.insert(older).unwrap();
        store.insert(order("b", OrderStatus::Paid)).unwrap();

        let ids: Vec<String> = store.list().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["b".to_string(), "a".to_string()]);
    }
}
