use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
