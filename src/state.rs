use std::sync::Arc;

use crate::config::Config;
use crate::engine::back_office::BackOffice;
use crate::engine::dispatch::DispatchCoordinator;
use crate::error::AppError;
use crate::insights::{InsightGenerator, InsightService};
use crate::models::order::OrderStatus;
use crate::observability::metrics::Metrics;
use crate::seed;
use crate::store::activity::ActivityLog;
use crate::store::directory::{CustomerDirectory, StaffDirectory};
use crate::store::drivers::DriverRegistry;
use crate::store::inventory::InventoryStore;
use crate::store::orders::OrderStore;
use crate::store::recipients::RecipientDirectory;

pub struct AppState {
    pub orders: Arc<OrderStore>,
    pub drivers: Arc<DriverRegistry>,
    pub recipients: Arc<RecipientDirectory>,
    pub inventory: Arc<InventoryStore>,
    pub staff: Arc<StaffDirectory>,
    pub customers: Arc<CustomerDirectory>,
    pub activity: Arc<ActivityLog>,
    pub dispatch: DispatchCoordinator,
    pub back_office: BackOffice,
    pub insights: InsightService,
    pub metrics: Metrics,
}

impl AppState {
    /// Empty stores around the fixed driver roster.
    pub fn new(config: &Config, generator: Arc<dyn InsightGenerator>) -> Self {
        let metrics = Metrics::new();

        let orders = Arc::new(OrderStore::new());
        let drivers = Arc::new(DriverRegistry::new(seed::drivers()));
        let recipients = Arc::new(RecipientDirectory::new());
        let inventory = Arc::new(InventoryStore::new());
        let staff = Arc::new(StaffDirectory::new());
        let customers = Arc::new(CustomerDirectory::new());
        let activity = Arc::new(ActivityLog::new(
            config.operator(),
            config.event_buffer_size,
            metrics.activity_entries_total.clone(),
        ));

        let dispatch = DispatchCoordinator::new(
            orders.clone(),
            drivers.clone(),
            activity.clone(),
            metrics.clone(),
            config.tracking_base_url.clone(),
        );
        let back_office = BackOffice::new(
            recipients.clone(),
            inventory.clone(),
            staff.clone(),
            customers.clone(),
            activity.clone(),
        );
        let insights = InsightService::new(generator, metrics.clone());

        Self {
            orders,
            drivers,
            recipients,
            inventory,
            staff,
            customers,
            activity,
            dispatch,
            back_office,
            insights,
            metrics,
        }
    }

    /// Builds the state and loads the mock dataset when configured to.
    pub fn bootstrap(
        config: &Config,
        generator: Arc<dyn InsightGenerator>,
    ) -> Result<Self, AppError> {
        let state = Self::new(config, generator);
        if config.seed_mock_data {
            seed::load(&state)?;
        }
        Ok(state)
    }

    pub fn refresh_gauges(&self) {
        let counts = self.orders.count_by_status();
        for status in OrderStatus::ALL {
            let count = counts.get(&status).copied().unwrap_or(0);
            self.metrics
                .orders_by_status
                .with_label_values(&[status.as_str()])
                .set(count as i64);
        }
    }
}
