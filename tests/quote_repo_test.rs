use chrono::Utc;
use uuid::Uuid;

use gapallet_backend::config::mongo_conf::MongoConfig;
use gapallet_backend::model::quote::QuoteRequest;
use gapallet_backend::repository::quote_repo::{MongoQuoteRepository, QuoteRepository};
use gapallet_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use gapallet_backend::repository::{mongo, LIST_FETCH_LIMIT};

// These tests need a running MongoDB, run them with `cargo test -- --ignored`

async fn setup_quote_repository() -> RepositoryResult<MongoQuoteRepository> {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();
    let config = MongoConfig::from_env()
        .map_err(|e| RepositoryError::database(format!("Failed to load MongoConfig: {}", e)))?;
    let client = mongo::connect(&config).await?;
    let db = client.database(&config.database);
    Ok(MongoQuoteRepository::new(&db, &config))
}

#[tokio::test]
#[ignore]
async fn test_quote_repository_round_trip() {
    let repo = setup_quote_repository()
        .await
        .expect("Failed to setup quote repository");

    let request = QuoteRequest {
        id: Uuid::new_v4().to_string(),
        name: "Integration Test".to_string(),
        email: "integration@example.com".to_string(),
        phone: None,
        company: Some("Test Logistics".to_string()),
        pallet_type: "euro".to_string(),
        quantity: Some(250),
        dimensions: Some("1200x800x144".to_string()),
        additional_info: None,
        created_at: Utc::now(),
    };

    let inserted = repo
        .insert(request.clone())
        .await
        .expect("Failed to insert quote request");
    assert_eq!(inserted.id, request.id);

    let all = repo.list_all().await.expect("Failed to list quote requests");
    let found = all
        .iter()
        .find(|r| r.id == request.id)
        .expect("Inserted quote request not listed");
    assert_eq!(found.pallet_type, request.pallet_type);
    assert_eq!(found.quantity, request.quantity);
    assert_eq!(found.dimensions, request.dimensions);
    assert_eq!(found.additional_info, request.additional_info);
    assert_eq!(found.created_at, request.created_at);
}

#[tokio::test]
#[ignore]
async fn test_list_all_is_capped() {
    let _ = dotenv::dotenv();
    let mut config = MongoConfig::from_env().expect("Failed to load MongoConfig");
    // Seed a scratch collection past the cap so the truncation is observable
    // no matter what the shared collection already holds
    config.quote_collection = format!("quote_requests_cap_{}", Uuid::new_v4().simple());
    let client = mongo::connect(&config)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&config.database);
    let collection = db.collection::<QuoteRequest>(&config.quote_collection);

    let seed: Vec<QuoteRequest> = (0..LIST_FETCH_LIMIT as usize + 1)
        .map(|n| QuoteRequest {
            id: Uuid::new_v4().to_string(),
            name: format!("Bulk {}", n),
            email: "bulk@example.com".to_string(),
            phone: None,
            company: None,
            pallet_type: "euro".to_string(),
            quantity: Some(n as i64),
            dimensions: None,
            additional_info: None,
            created_at: Utc::now(),
        })
        .collect();
    collection
        .insert_many(&seed, None)
        .await
        .expect("Failed to seed quote requests");

    let repo = MongoQuoteRepository::new(&db, &config);
    let all = repo.list_all().await.expect("Failed to list quote requests");

    collection
        .drop(None)
        .await
        .expect("Failed to drop the scratch collection");

    assert_eq!(all.len(), LIST_FETCH_LIMIT as usize);
}
