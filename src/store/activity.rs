use std::collections::VecDeque;

use chrono::Utc;
use parking_lot::RwLock;
use prometheus::IntCounter;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::models::activity::{ActivityEntry, Operator};

/// Append-only audit trail, newest entry first. Growth is unbounded.
pub struct ActivityLog {
    operator: Operator,
    entries: RwLock<VecDeque<ActivityEntry>>,
    events_tx: broadcast::Sender<ActivityEntry>,
    recorded: IntCounter,
}

impl ActivityLog {
    pub fn new(operator: Operator, event_buffer_size: usize, recorded: IntCounter) -> Self {
        let (events_tx, _unused_rx) = broadcast::channel(event_buffer_size.max(1));

        Self {
            operator,
            entries: RwLock::new(VecDeque::new()),
            events_tx,
            recorded,
        }
    }

    /// Loads historical entries, given newest first, behind anything already
    /// recorded.
    pub fn seed(&self, history: Vec<ActivityEntry>) {
        self.entries.write().extend(history);
    }

    pub fn record(&self, action: impl Into<String>, target_id: Option<&str>) -> ActivityEntry {
        let entry = ActivityEntry {
            id: Uuid::new_v4().to_string(),
            user_id: self.operator.id.clone(),
            user_name: self.operator.name.clone(),
            action: action.into(),
            timestamp: Utc::now(),
            target_id: target_id.map(str::to_string),
        };

        self.entries.write().push_front(entry.clone());
        self.recorded.inc();
        // No subscribers is the normal case when no UI is attached.
        let _ = self.events_tx.send(entry.clone());

        entry
    }

    pub fn entries(&self, limit: Option<usize>) -> Vec<ActivityEntry> {
        let entries = self.entries.read();
        let take = limit.unwrap_or(entries.len());
        entries.iter().take(take).cloned().collect()
    }

    pub fn latest(&self) -> Option<ActivityEntry> {
        self.entries.read().front().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ActivityEntry> {
        self.events_tx.subscribe()
    }
}
