use crate::config::mongo_conf::MongoConfig;
use crate::model::contact::ContactRequest;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::LIST_FETCH_LIMIT;
use async_trait::async_trait;
use bson::doc;
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;
use tracing::{error, info};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, request: ContactRequest) -> RepositoryResult<ContactRequest>;
    async fn list_all(&self) -> RepositoryResult<Vec<ContactRequest>>;
}

pub struct MongoContactRepository {
    collection: mongodb::Collection<ContactRequest>,
}

impl MongoContactRepository {
    /// Create a new MongoContactRepository on the shared database handle
    pub fn new(db: &Database, config: &MongoConfig) -> Self {
        let collection = db.collection::<ContactRequest>(&config.contact_collection);
        MongoContactRepository { collection }
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    #[tracing::instrument(skip(self, request), fields(id = %request.id))]
    async fn insert(&self, request: ContactRequest) -> RepositoryResult<ContactRequest> {
        info!("Inserting contact request");
        let result = self.collection.insert_one(&request, None).await;
        match result {
            Ok(_) => {
                info!("Contact request stored successfully");
                Ok(request)
            }
            Err(e) => {
                error!("Failed to insert contact request: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to insert contact request: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> RepositoryResult<Vec<ContactRequest>> {
        info!("Listing contact requests");
        // Drop the store-internal _id so documents decode into the model as-is
        let options = FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .limit(LIST_FETCH_LIMIT)
            .build();
        let cursor = self.collection.find(None, options).await;
        match cursor {
            Ok(mut cursor) => {
                let mut requests = Vec::new();
                while let Some(request) = cursor.next().await {
                    match request {
                        Ok(r) => requests.push(r),
                        Err(e) => {
                            error!("Failed to deserialize contact request: {}", e);
                            return Err(RepositoryError::serialization(format!(
                                "Failed to deserialize contact request: {}",
                                e
                            )));
                        }
                    }
                }
                info!("Fetched {} contact requests", requests.len());
                Ok(requests)
            }
            Err(e) => {
                error!("Failed to list contact requests: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to list contact requests: {}",
                    e
                )))
            }
        }
    }
}
