pub mod gemini;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::models::inventory::InventoryItem;
use crate::models::order::Order;
use crate::observability::metrics::Metrics;

pub const INSIGHTS_FALLBACK: &str = "Unable to generate insights at this time.";
pub const RISK_FALLBACK: &str = "Risk assessment unavailable.";

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("GEMINI_API_KEY is missing")]
    MissingCredential,

    #[error("insight request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("insight service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("insight service returned no text")]
    EmptyResponse,

    #[error("failed to serialize snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Free-form text generation from a prompt.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError>;
}

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub text: String,
    pub generated_at: DateTime<Utc>,
    pub request: u64,
    pub degraded: bool,
}

/// Advisory text for the dashboard and fraud watch. Never returns an error:
/// generator failures degrade to a fixed fallback sentence.
pub struct InsightService {
    generator: Arc<dyn InsightGenerator>,
    metrics: Metrics,
    issued: AtomicU64,
    latest: RwLock<Option<Insight>>,
}

impl InsightService {
    pub fn new(generator: Arc<dyn InsightGenerator>, metrics: Metrics) -> Self {
        Self {
            generator,
            metrics,
            issued: AtomicU64::new(0),
            latest: RwLock::new(None),
        }
    }

    /// Requests fresh operations insights. The cached copy only moves forward:
    /// a reply to an older request never replaces a newer one.
    pub async fn ops_insights(&self, orders: &[Order], inventory: &[InventoryItem]) -> Insight {
        let request = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let outcome = match ops_prompt(orders, inventory) {
            Ok(prompt) => self.run("ops", &prompt).await,
            Err(err) => Err(err),
        };
        let insight = self.finish("ops", request, outcome, INSIGHTS_FALLBACK);

        let mut latest = self.latest.write();
        if latest.as_ref().is_none_or(|current| current.request < request) {
            *latest = Some(insight.clone());
        }

        insight
    }

    pub fn latest_ops_insights(&self) -> Option<Insight> {
        self.latest.read().clone()
    }

    pub async fn fraud_risk(&self, order: &Order) -> Insight {
        let request = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let outcome = match risk_prompt(order) {
            Ok(prompt) => self.run("fraud_risk", &prompt).await,
            Err(err) => Err(err),
        };
        self.finish("fraud_risk", request, outcome, RISK_FALLBACK)
    }

    async fn run(&self, kind: &str, prompt: &str) -> Result<String, InsightError> {
        let text = self.generator.generate(prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            warn!(kind, "insight generator returned blank text");
            return Err(InsightError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    fn finish(
        &self,
        kind: &str,
        request: u64,
        outcome: Result<String, InsightError>,
        fallback: &str,
    ) -> Insight {
        let (text, degraded) = match outcome {
            Ok(text) => {
                self.metrics
                    .insight_requests_total
                    .with_label_values(&[kind, "success"])
                    .inc();
                (text, false)
            }
            Err(err) => {
                self.metrics
                    .insight_requests_total
                    .with_label_values(&[kind, "fallback"])
                    .inc();
                warn!(kind, error = %err, "insight generation failed; using fallback");
                (fallback.to_string(), true)
            }
        };

        Insight {
            text,
            generated_at: Utc::now(),
            request,
            degraded,
        }
    }
}

fn ops_prompt(orders: &[Order], inventory: &[InventoryItem]) -> Result<String, InsightError> {
    let snapshot = serde_json::to_string(&json!({
        "orders": orders,
        "inventory": inventory,
    }))?;

    Ok(format!(
        "You are an operations analyst for Nha Kinhon, which delivers provisions \
         bought by expats abroad to recipients in Guinea-Bissau. Give three brief, \
         actionable insights for the London and Bissau teams as a plain bulleted \
         list, focusing on delivery bottlenecks, fraud risk and stock replenishment.\n\
         Snapshot: {snapshot}"
    ))
}

fn risk_prompt(order: &Order) -> Result<String, InsightError> {
    let snapshot = serde_json::to_string(order)?;

    Ok(format!(
        "Assess this order for fraud or logistical risk. Expats in the UK and \
         elsewhere pay for food delivered to family in Guinea-Bissau. Answer with \
         one sentence naming the risk level (Low, Medium or High) and the reason.\n\
         Order: {snapshot}"
    ))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::{
        INSIGHTS_FALLBACK, InsightError, InsightGenerator, InsightService, RISK_FALLBACK,
    };
    use crate::models::order::OrderStatus;
    use crate::observability::metrics::Metrics;
    use crate::store::orders::tests::order;

    struct Scripted {
        replies: Mutex<VecDeque<(Duration, Result<String, ()>)>>,
        prompts: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(replies: Vec<(Duration, Result<String, ()>)>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl InsightGenerator for Scripted {
        async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
            self.prompts.lock().push(prompt.to_string());
            let next = self.replies.lock().pop_front();
            match next {
                Some((delay, reply)) => {
                    tokio::time::sleep(delay).await;
                    reply.map_err(|()| InsightError::EmptyResponse)
                }
                None => Err(InsightError::MissingCredential),
            }
        }
    }

    #[tokio::test]
    async fn failure_degrades_to_fallback_text() {
        let generator = Scripted::new(vec![]);
        let service = InsightService::new(generator, Metrics::new());

        let ops = service.ops_insights(&[], &[]).await;
        let risk = service
            .fraud_risk(&order("o3", OrderStatus::Pending))
            .await;

        assert_eq!(ops.text, INSIGHTS_FALLBACK);
        assert!(ops.degraded);
        assert_eq!(risk.text, RISK_FALLBACK);
        assert!(risk.degraded);
    }

    #[tokio::test]
    async fn blank_reply_counts_as_failure() {
        let generator = Scripted::new(vec![(Duration::ZERO, Ok("   ".to_string()))]);
        let service = InsightService::new(generator, Metrics::new());

        let ops = service.ops_insights(&[], &[]).await;

        assert_eq!(ops.text, INSIGHTS_FALLBACK);
    }

    #[tokio::test]
    async fn risk_prompt_carries_the_order_snapshot() {
        let generator = Scripted::new(vec![(
            Duration::ZERO,
            Ok("High: large quantity requested in a short time.".to_string()),
        )]);
        let service = InsightService::new(generator.clone(), Metrics::new());

        let risk = service
            .fraud_risk(&order("o3", OrderStatus::Pending))
            .await;

        assert_eq!(risk.text, "High: large quantity requested in a short time.");
        assert!(!risk.degraded);
        let prompts = generator.prompts.lock();
        assert!(prompts[0].contains("\"order_number\":\"BX-o3\""));
    }

    #[tokio::test]
    async fn newer_request_wins_over_slower_older_one() {
        let generator = Scripted::new(vec![
            (Duration::from_millis(80), Ok("stale".to_string())),
            (Duration::ZERO, Ok("fresh".to_string())),
        ]);
        let service = InsightService::new(generator, Metrics::new());

        let (older, newer) = tokio::join!(
            service.ops_insights(&[], &[]),
            service.ops_insights(&[], &[])
        );

        assert_eq!(older.text, "stale");
        assert_eq!(newer.text, "fresh");
        let latest = service.latest_ops_insights().unwrap();
        assert_eq!(latest.text, "fresh");
        assert_eq!(latest.request, newer.request);
    }
}
