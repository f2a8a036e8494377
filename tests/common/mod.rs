#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use gapallet_backend::model::contact::ContactRequest;
use gapallet_backend::model::quote::QuoteRequest;
use gapallet_backend::repository::contact_repo::ContactRepository;
use gapallet_backend::repository::quote_repo::QuoteRepository;
use gapallet_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use gapallet_backend::router::api_router;
use gapallet_backend::service::contact_service::ContactServiceImpl;
use gapallet_backend::service::quote_service::QuoteServiceImpl;

/// Contact store backed by a Vec, stands in for MongoDB in router tests.
#[derive(Default)]
pub struct InMemoryContactRepository {
    pub requests: Mutex<Vec<ContactRequest>>,
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, request: ContactRequest) -> RepositoryResult<ContactRequest> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<ContactRequest>> {
        Ok(self.requests.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryQuoteRepository {
    pub requests: Mutex<Vec<QuoteRequest>>,
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn insert(&self, request: QuoteRequest) -> RepositoryResult<QuoteRequest> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<QuoteRequest>> {
        Ok(self.requests.lock().unwrap().clone())
    }
}

/// Repositories that always fail, for store-outage behavior.
pub struct FailingContactRepository;

#[async_trait]
impl ContactRepository for FailingContactRepository {
    async fn insert(&self, _request: ContactRequest) -> RepositoryResult<ContactRequest> {
        Err(RepositoryError::database("simulated store outage"))
    }

    async fn list_all(&self) -> RepositoryResult<Vec<ContactRequest>> {
        Err(RepositoryError::database("simulated store outage"))
    }
}

pub struct FailingQuoteRepository;

#[async_trait]
impl QuoteRepository for FailingQuoteRepository {
    async fn insert(&self, _request: QuoteRequest) -> RepositoryResult<QuoteRequest> {
        Err(RepositoryError::database("simulated store outage"))
    }

    async fn list_all(&self) -> RepositoryResult<Vec<QuoteRequest>> {
        Err(RepositoryError::database("simulated store outage"))
    }
}

/// Full API router over in-memory stores, plus handles on the stores for
/// asserting what got persisted.
pub fn test_app() -> (
    Router,
    Arc<InMemoryContactRepository>,
    Arc<InMemoryQuoteRepository>,
) {
    let contact_repo = Arc::new(InMemoryContactRepository::default());
    let quote_repo = Arc::new(InMemoryQuoteRepository::default());
    let contact_service = Arc::new(ContactServiceImpl::new(contact_repo.clone()));
    let quote_service = Arc::new(QuoteServiceImpl::new(quote_repo.clone()));
    let router = api_router(contact_service, quote_service);
    (router, contact_repo, quote_repo)
}

/// Full API router whose stores reject every operation.
pub fn failing_app() -> Router {
    let contact_service = Arc::new(ContactServiceImpl::new(Arc::new(FailingContactRepository)));
    let quote_service = Arc::new(QuoteServiceImpl::new(Arc::new(FailingQuoteRepository)));
    api_router(contact_service, quote_service)
}
