use prometheus::{
    Encoder, IntCounter, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder,
};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub order_operations_total: IntCounterVec,
    pub activity_entries_total: IntCounter,
    pub insight_requests_total: IntCounterVec,
    pub orders_by_status: IntGaugeVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let order_operations_total = IntCounterVec::new(
            Opts::new(
                "order_operations_total",
                "Order lifecycle operations by operation and outcome",
            ),
            &["operation", "outcome"],
        )
        .expect("valid order_operations_total metric");

        let activity_entries_total =
            IntCounter::new("activity_entries_total", "Activity log entries recorded")
                .expect("valid activity_entries_total metric");

        let insight_requests_total = IntCounterVec::new(
            Opts::new(
                "insight_requests_total",
                "Text insight requests by kind and outcome",
            ),
            &["kind", "outcome"],
        )
        .expect("valid insight_requests_total metric");

        let orders_by_status = IntGaugeVec::new(
            Opts::new("orders_by_status", "Current number of orders per status"),
            &["status"],
        )
        .expect("valid orders_by_status metric");

        registry
            .register(Box::new(order_operations_total.clone()))
            .expect("register order_operations_total");
        registry
            .register(Box::new(activity_entries_total.clone()))
            .expect("register activity_entries_total");
        registry
            .register(Box::new(insight_requests_total.clone()))
            .expect("register insight_requests_total");
        registry
            .register(Box::new(orders_by_status.clone()))
            .expect("register orders_by_status");

        Self {
            registry,
            order_operations_total,
            activity_entries_total,
            insight_requests_total,
            orders_by_status,
        }
    }

    pub fn record_operation(&self, operation: &str, outcome: &str) {
        self.order_operations_total
            .with_label_values(&[operation, outcome])
            .inc();
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
