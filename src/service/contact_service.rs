use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::dto::contact_dto::CreateContactRequest;
use crate::model::contact::ContactRequest;
use crate::repository::contact_repo::ContactRepository;
use crate::repository::repository_error::RepositoryResult;

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn submit_contact(&self, dto: CreateContactRequest) -> RepositoryResult<ContactRequest>;
    async fn list_contacts(&self) -> RepositoryResult<Vec<ContactRequest>>;
}

pub struct ContactServiceImpl {
    pub contact_repo: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        ContactServiceImpl { contact_repo }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, dto))]
    async fn submit_contact(&self, dto: CreateContactRequest) -> RepositoryResult<ContactRequest> {
        info!("Registering new contact request");
        // Identity and timestamp are assigned here, never taken from the client
        let request = ContactRequest {
            id: Uuid::new_v4().to_string(),
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            company: dto.company,
            message: dto.message,
            created_at: Utc::now(),
        };
        let res = self.contact_repo.insert(request).await;
        match &res {
            Ok(_) => info!("Contact request registered successfully"),
            Err(e) => error!("Failed to register contact request: {e}"),
        }
        res
    }

    #[instrument(skip(self))]
    async fn list_contacts(&self) -> RepositoryResult<Vec<ContactRequest>> {
        info!("Listing contact requests");
        let res = self.contact_repo.list_all().await;
        match &res {
            Ok(requests) => info!("Fetched {} contact requests", requests.len()),
            Err(e) => error!("Failed to list contact requests: {e}"),
        }
        res
    }
}
