use crate::config::mongo_conf::MongoConfig;
use crate::model::quote::QuoteRequest;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::LIST_FETCH_LIMIT;
use async_trait::async_trait;
use bson::doc;
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;
use tracing::{error, info};

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn insert(&self, request: QuoteRequest) -> RepositoryResult<QuoteRequest>;
    async fn list_all(&self) -> RepositoryResult<Vec<QuoteRequest>>;
}

pub struct MongoQuoteRepository {
    collection: mongodb::Collection<QuoteRequest>,
}

impl MongoQuoteRepository {
    pub fn new(db: &Database, config: &MongoConfig) -> Self {
        let collection = db.collection::<QuoteRequest>(&config.quote_collection);
        MongoQuoteRepository { collection }
    }
}

#[async_trait]
impl QuoteRepository for MongoQuoteRepository {
    #[tracing::instrument(skip(self, request), fields(id = %request.id))]
    async fn insert(&self, request: QuoteRequest) -> RepositoryResult<QuoteRequest> {
        info!("Inserting quote request");
        let result = self.collection.insert_one(&request, None).await;
        match result {
            Ok(_) => {
                info!("Quote request stored successfully");
                Ok(request)
            }
            Err(e) => {
                error!("Failed to insert quote request: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to insert quote request: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> RepositoryResult<Vec<QuoteRequest>> {
        info!("Listing quote requests");
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
                            error!("Failed to deserialize quote request: {}", e);
                            return Err(RepositoryError::serialization(format!(
                                "Failed to deserialize quote request: {}",
                                e
                            )));
                        }
                    }
                }
                info!("Fetched {} quote requests", requests.len());
                Ok(requests)
            }
            Err(e) => {
                error!("Failed to list quote requests: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to list quote requests: {}",
                    e
                )))
            }
        }
    }
}
