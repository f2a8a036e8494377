use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::dto::quote_dto::CreateQuoteRequest;
use crate::model::quote::QuoteRequest;
use crate::repository::quote_repo::QuoteRepository;
use crate::repository::repository_error::RepositoryResult;

#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn submit_quote(&self, dto: CreateQuoteRequest) -> RepositoryResult<QuoteRequest>;
    async fn list_quotes(&self) -> RepositoryResult<Vec<QuoteRequest>>;
}

pub struct QuoteServiceImpl {
    pub quote_repo: Arc<dyn QuoteRepository>,
}

impl QuoteServiceImpl {
    pub fn new(quote_repo: Arc<dyn QuoteRepository>) -> Self {
        QuoteServiceImpl { quote_repo }
    }
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    #[instrument(skip(self, dto))]
    async fn submit_quote(&self, dto: CreateQuoteRequest) -> RepositoryResult<QuoteRequest> {
        info!("Registering new quote request");
        let request = QuoteRequest {
            id: Uuid::new_v4().to_string(),
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            company: dto.company,
            pallet_type: dto.pallet_type,
            quantity: dto.quantity,
            dimensions: dto.dimensions,
            additional_info: dto.additional_info,
            created_at: Utc::now(),
        };
        let res = self.quote_repo.insert(request).await;
        match &res {
            Ok(_) => info!("Quote request registered successfully"),
            Err(e) => error!("Failed to register quote request: {e}"),
        }
        res
    }

    #[instrument(skip(self))]
    async fn list_quotes(&self) -> RepositoryResult<Vec<QuoteRequest>> {
        info!("Listing quote requests");
        let res = self.quote_repo.list_all().await;
        match &res {
            Ok(requests) => info!("Fetched {} quote requests", requests.len()),
            Err(e) => error!("Failed to list quote requests: {e}"),
        }
        res
    }
}
