use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::warn;

use crate::dto::quote_dto::CreateQuoteRequest;
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::HandlerError;

// Handler: Create Quote Request
pub async fn create_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(dto) = payload.map_err(|rejection| {
        warn!("Rejected quote payload: {}", rejection.body_text());
        HandlerError::validation(rejection.body_text())
    })?;
    let created = service.submit_quote(dto).await?;
    Ok(Json(created))
}

// Handler: List Quote Requests
pub async fn list_quotes_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let requests = service.list_quotes().await?;
    Ok(Json(requests))
}
