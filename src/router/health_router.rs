use axum::{routing::get, Router};

use crate::handler::health_handler::{health_handler, root_handler};

pub fn health_router() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}
