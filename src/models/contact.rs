use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgement handed back by the contact service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}
