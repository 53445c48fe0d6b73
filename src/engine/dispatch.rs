use std::sync::Arc;

use tracing::{info, warn};

use crate::error::AppError;
use crate::models::order::{Order, OrderStatus};
use crate::observability::metrics::Metrics;
use crate::store::activity::ActivityLog;
use crate::store::drivers::DriverRegistry;
use crate::store::orders::OrderStore;

/// Applies the order lifecycle rules. Holds no order state of its own: every
/// change goes through the injected [`OrderStore`] and is mirrored by exactly
/// one [`ActivityLog`] entry.
pub struct DispatchCoordinator {
    orders: Arc<OrderStore>,
    drivers: Arc<DriverRegistry>,
    activity: Arc<ActivityLog>,
    metrics: Metrics,
    tracking_base_url: String,
}

impl DispatchCoordinator {
    pub fn new(
        orders: Arc<OrderStore>,
        drivers: Arc<DriverRegistry>,
        activity: Arc<ActivityLog>,
        metrics: Metrics,
        tracking_base_url: impl Into<String>,
    ) -> Self {
        let mut tracking_base_url = tracking_base_url.into();
        if !tracking_base_url.ends_with('/') {
            tracking_base_url.push('/');
        }

        Self {
            orders,
            drivers,
            activity,
            metrics,
            tracking_base_url,
        }
    }

    /// Moves `Pending -> Paid -> Processing -> Dispatched`. Calling it on a
    /// dispatched or closed order changes nothing and records nothing.
    pub fn advance_status(&self, order_id: &str) -> Result<Order, AppError> {
        let result = self.orders.modify(order_id, |order| match order.status.successor() {
            Some(next) => {
                order.status = next;
                Ok(true)
            }
            None => Ok(false),
        });

        let applied = self.observe("advance", order_id, result)?;
        if applied.changed {
            self.record_status_change(&applied.order);
        } else {
            info!(
                order_id = %order_id,
                status = %applied.order.status,
                "advance ignored: no further automatic transition"
            );
        }

        Ok(applied.order)
    }

    /// Attaches a courier. Paid and processing orders are dispatched as a side
    /// effect; any other status is left as it is.
    pub fn assign_driver(&self, order_id: &str, driver: &str) -> Result<Order, AppError> {
        let driver_name = match self.drivers.resolve(driver) {
            Some(found) => found.name.clone(),
            None => {
                return self.observe(
                    "assign_driver",
                    order_id,
                    Err(AppError::NotFound(format!("driver {driver} not found"))),
                );
            }
        };

        let result = self.orders.modify(order_id, |order| {
            order.driver_name = Some(driver_name.clone());
            order.status = order.status.after_driver_assignment();
            Ok(true)
        });

        let applied = self.observe("assign_driver", order_id, result)?;
        self.activity.record(
            format!("Assigned {driver_name} to order {order_id}"),
            Some(order_id),
        );
        info!(
            order_id = %order_id,
            driver = %driver_name,
            status = %applied.order.status,
            "driver assigned"
        );

        Ok(applied.order)
    }

    /// Records the carrier reference regardless of status and derives the
    /// public tracking link from it.
    pub fn set_tracking(&self, order_id: &str, tracking_id: &str) -> Result<Order, AppError> {
        let tracking_id = tracking_id.trim();
        if tracking_id.is_empty() {
            return self.observe(
                "set_tracking",
                order_id,
                Err(AppError::BadRequest("tracking id cannot be empty".to_string())),
            );
        }

        let tracking_url = self.tracking_url(tracking_id);
        let result = self.orders.modify(order_id, |order| {
            order.tracking_id = Some(tracking_id.to_string());
            order.tracking_url = Some(tracking_url.clone());
            Ok(true)
        });

        let applied = self.observe("set_tracking", order_id, result)?;
        self.activity.record(
            format!("Updated tracking ID for order {order_id} to {tracking_id}"),
            Some(order_id),
        );
        info!(order_id = %order_id, tracking_id = %tracking_id, "tracking updated");

        Ok(applied.order)
    }

    /// Marks the order delivered. Requires an assigned driver; repeated calls
    /// are accepted and refresh `updated_at` each time.
    pub fn complete_delivery(
        &self,
        order_id: &str,
        proof_of_delivery: Option<String>,
    ) -> Result<Order, AppError> {
        let result = self.orders.modify(order_id, |order| {
            if order.driver_name.is_none() {
                return Err(AppError::PreconditionFailed(format!(
                    "order {order_id} has no driver assigned"
                )));
            }

            order.status = OrderStatus::Delivered;
            if let Some(pod) = proof_of_delivery.filter(|pod| !pod.trim().is_empty()) {
                order.proof_of_delivery = Some(pod);
            }
            Ok(true)
        });

        let applied = self.observe("complete_delivery", order_id, result)?;
        self.record_status_change(&applied.order);

        Ok(applied.order)
    }

    /// Cancels from any status. There is no way back.
    pub fn cancel(&self, order_id: &str) -> Result<Order, AppError> {
        self.force_status("cancel", order_id, OrderStatus::Cancelled)
    }

    /// Operator override, also the only way an order becomes `Refunded`.
    pub fn set_status(&self, order_id: &str, status: OrderStatus) -> Result<Order, AppError> {
        self.force_status("set_status", order_id, status)
    }

    pub fn tracking_url(&self, tracking_id: &str) -> String {
        format!("{}{}", self.tracking_base_url, tracking_id)
    }

    fn force_status(
        &self,
        operation: &str,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Order, AppError> {
        let result = self.orders.modify(order_id, |order| {
            order.status = status;
            Ok(true)
        });

        let applied = self.observe(operation, order_id, result)?;
        self.record_status_change(&applied.order);

        Ok(applied.order)
    }

    fn record_status_change(&self, order: &Order) {
        self.activity.record(
            format!("Changed order {} status to {}", order.id, order.status),
            Some(&order.id),
        );
        info!(order_id = %order.id, status = %order.status, "order status changed");
    }

    fn observe<T>(
        &self,
        operation: &str,
        order_id: &str,
        result: Result<T, AppError>,
    ) -> Result<T, AppError> {
        match &result {
            Ok(_) => self.metrics.record_operation(operation, "success"),
            Err(err) => {
                self.metrics.record_operation(operation, err.kind());
                warn!(order_id = %order_id, operation, error = %err, "order operation rejected");
            }
        }
        result
    }
}
