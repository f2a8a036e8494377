use serde::{Deserialize, Serialize};

/// Incoming contact form payload. Unknown keys are dropped during
/// deserialization, missing optional fields become None.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
}
