use serde::{Deserialize, Serialize};

/// Incoming quote form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub pallet_type: String,
    pub quantity: Option<i64>,
    pub dimensions: Option<String>,
    pub additional_info: Option<String>,
}
