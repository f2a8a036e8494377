use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::warn;

use crate::dto::contact_dto::CreateContactRequest;
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::util::error::HandlerError;

// Handler: Create Contact Request
//
// A rejected body (malformed JSON, missing required field, wrong type)
// never reaches the service, so nothing is persisted for it.
pub async fn create_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    payload: Result<Json<CreateContactRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(dto) = payload.map_err(|rejection| {
        warn!("Rejected contact payload: {}", rejection.body_text());
        HandlerError::validation(rejection.body_text())
    })?;
    let created = service.submit_contact(dto).await?;
    Ok(Json(created))
}

// Handler: List Contact Requests
pub async fn list_contacts_handler(
    State(service): State<Arc<ContactServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let requests = service.list_contacts().await?;
    Ok(Json(requests))
}
