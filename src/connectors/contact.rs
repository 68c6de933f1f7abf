//! Contact form delivery.
//!
//! There is no mail backend yet: [`SimulatedContactService`] waits for the
//! configured latency and acknowledges the message. Each submission is a
//! single call with no retries.

use crate::connectors::config::ContactConfig;
use crate::connectors::errors::ConnectorError;
use crate::models::{ContactMessage, ContactReceipt};
use actix_web::web;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[async_trait::async_trait]
pub trait ContactConnector: Send + Sync {
    async fn submit(&self, message: &ContactMessage) -> Result<ContactReceipt, ConnectorError>;
}

pub struct SimulatedContactService {
    latency: Duration,
}

impl SimulatedContactService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait::async_trait]
impl ContactConnector for SimulatedContactService {
    #[tracing::instrument(name = "Simulated contact submission", skip(self, message), fields(email = %message.email))]
    async fn submit(&self, message: &ContactMessage) -> Result<ContactReceipt, ConnectorError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let receipt = ContactReceipt {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        };
        tracing::info!(receipt_id = %receipt.id, "Contact message accepted");
        Ok(receipt)
    }
}

pub fn init(config: &ContactConfig) -> web::Data<Arc<dyn ContactConnector>> {
    let connector: Arc<dyn ContactConnector> = Arc::new(SimulatedContactService::new(
        Duration::from_millis(config.simulated_latency_ms),
    ));
    web::Data::new(connector)
}
