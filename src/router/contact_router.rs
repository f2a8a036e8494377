use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handler::contact_handler::{create_contact_handler, list_contacts_handler};
use crate::service::contact_service::ContactServiceImpl;

pub fn contact_router(service: Arc<ContactServiceImpl>) -> Router {
    Router::new()
        .route(
            "/contact",
            post(create_contact_handler).get(list_contacts_handler),
        )
        .with_state(service)
}
