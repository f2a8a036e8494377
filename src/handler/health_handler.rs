use axum::Json;
use serde_json::{json, Value};

/// Banner advertised by the API root and health probe.
pub const SERVICE_NAME: &str = "G&A Pallet API";

// Handler: API root banner
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": SERVICE_NAME }))
}

// Handler: liveness probe, no store round-trip
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": SERVICE_NAME }))
}
