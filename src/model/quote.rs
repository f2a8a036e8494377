use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored quote form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub pallet_type: String,
    pub quantity: Option<i64>,
    pub dimensions: Option<String>,
    pub additional_info: Option<String>,
    pub created_at: DateTime<Utc>,
}
