use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Default collection for contact form submissions
pub const DEFAULT_CONTACT_COLLECTION: &str = "contact_requests";
/// Default collection for quote form submissions
pub const DEFAULT_QUOTE_COLLECTION: &str = "quote_requests";

/// MongoDB configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConfig {
    /// MongoDB connection URI
    pub uri: String,
    /// Database name
    pub database: String,
    /// Collection name for contact requests
    pub contact_collection: String,
    /// Collection name for quote requests
    pub quote_collection: String,
    /// Connection pool size
    pub pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl MongoConfig {
    /// Load MongoDB configuration from environment variables
    ///
    /// Expected environment variables:
    /// - MONGO_URL: MongoDB connection URI (required)
    /// - DB_NAME: Database name (required)
    /// - MONGO_CONTACT_COLLECTION: Collection for contact requests (defaults to contact_requests)
    /// - MONGO_QUOTE_COLLECTION: Collection for quote requests (defaults to quote_requests)
    /// - MONGO_POOL_SIZE: Connection pool size (defaults to 10)
    /// - MONGO_CONNECTION_TIMEOUT: Connection timeout in seconds (defaults to 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading MongoDB configuration from environment variables");

        let uri = env::var("MONGO_URL").map_err(|_| {
            error!("MONGO_URL environment variable not found");
            ConfigError::EnvVarNotFound("MONGO_URL".to_string())
        })?;

        let database = env::var("DB_NAME").map_err(|_| {
            error!("DB_NAME environment variable not found");
            ConfigError::EnvVarNotFound("DB_NAME".to_string())
        })?;
        debug!("MongoDB database: {}", database);

        let contact_collection = env::var("MONGO_CONTACT_COLLECTION")
            .unwrap_or_else(|_| DEFAULT_CONTACT_COLLECTION.to_string());
        debug!("MongoDB contact collection: {}", contact_collection);

        let quote_collection = env::var("MONGO_QUOTE_COLLECTION")
            .unwrap_or_else(|_| DEFAULT_QUOTE_COLLECTION.to_string());
        debug!("MongoDB quote collection: {}", quote_collection);

        let pool_size = env::var("MONGO_POOL_SIZE")
            .unwrap_or_else(|_| {
                warn!("MONGO_POOL_SIZE not set, using default: 10");
                "10".to_string()
            })
            .parse::<u32>()
            .map_err(|_| {
                error!("Invalid MONGO_POOL_SIZE value");
                ConfigError::InvalidValue("Invalid MONGO_POOL_SIZE value".to_string())
            })?;
        debug!("MongoDB pool size: {}", pool_size);

        let connection_timeout_secs = env::var("MONGO_CONNECTION_TIMEOUT")
            .unwrap_or_else(|_| {
                warn!("MONGO_CONNECTION_TIMEOUT not set, using default: 5 seconds");
                "5".to_string()
            })
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid MONGO_CONNECTION_TIMEOUT value");
                ConfigError::InvalidValue("Invalid MONGO_CONNECTION_TIMEOUT value".to_string())
            })?;
        debug!("MongoDB connection timeout: {} seconds", connection_timeout_secs);

        let config = MongoConfig {
            uri,
            database,
            contact_collection,
            quote_collection,
            pool_size,
            connection_timeout_secs,
        };

        config.validate()?;
        info!("MongoDB configuration loaded successfully");
        Ok(config)
    }

    /// Create MongoConfig for testing
    pub fn from_test_env() -> Self {
        MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "test_db".to_string(),
            contact_collection: "test_contact_requests".to_string(),
            quote_collection: "test_quote_requests".to_string(),
            pool_size: 2,
            connection_timeout_secs: 2,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uri.is_empty() {
            error!("MongoDB URI is empty");
            return Err(ConfigError::ValidationError(
                "MongoDB URI cannot be empty".to_string(),
            ));
        }

        if self.database.is_empty() {
            error!("MongoDB database is empty");
            return Err(ConfigError::ValidationError(
                "MongoDB database cannot be empty".to_string(),
            ));
        }

        if self.contact_collection.is_empty() {
            error!("MongoDB contact collection is empty");
            return Err(ConfigError::ValidationError(
                "MongoDB contact collection cannot be empty".to_string(),
            ));
        }

        if self.quote_collection.is_empty() {
            error!("MongoDB quote collection is empty");
            return Err(ConfigError::ValidationError(
                "MongoDB quote collection cannot be empty".to_string(),
            ));
        }

        if self.pool_size == 0 {
            error!("MongoDB pool size is 0");
            return Err(ConfigError::ValidationError(
                "MongoDB pool size must be greater than 0".to_string(),
            ));
        }

        if self.connection_timeout_secs == 0 {
            error!("MongoDB connection timeout is 0");
            return Err(ConfigError::ValidationError(
                "MongoDB connection timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "gapallet".to_string(),
            contact_collection: DEFAULT_CONTACT_COLLECTION.to_string(),
            quote_collection: DEFAULT_QUOTE_COLLECTION.to_string(),
            pool_size: 10,
            connection_timeout_secs: 5,
        }
    }
}
