pub mod contact_router;
pub mod health_router;
pub mod quote_router;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handler::health_handler::root_handler;
use crate::router::contact_router::contact_router;
use crate::router::health_router::health_router;
use crate::router::quote_router::quote_router;
use crate::service::contact_service::ContactServiceImpl;
use crate::service::quote_service::QuoteServiceImpl;

/// Assemble the full API surface under the /api prefix.
///
/// Nesting maps the inner "/" to exactly "/api", so the trailing-slash
/// variant "/api/" gets its own route to answer with the same banner.
pub fn api_router(
    contact_service: Arc<ContactServiceImpl>,
    quote_service: Arc<QuoteServiceImpl>,
) -> Router {
    let api = health_router()
        .merge(contact_router(contact_service))
        .merge(quote_router(quote_service));

    Router::new()
        .nest("/api", api)
        .route("/api/", get(root_handler))
}
