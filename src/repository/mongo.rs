use bson::doc;
use mongodb::options::{ClientOptions, ResolverConfig};
use mongodb::Client;
use tracing::{error, info};

use crate::config::mongo_conf::MongoConfig;
use crate::repository::repository_error::RepositoryResult;

/// Build the shared MongoDB client from configuration.
///
/// The client owns the connection pool; every repository hangs off the same
/// instance. A ping runs against the configured database so that an
/// unreachable store surfaces at startup instead of on the first request.
pub async fn connect(config: &MongoConfig) -> RepositoryResult<Client> {
    info!("Connecting to MongoDB at database '{}'", config.database);

    let mut client_options =
        ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare())
            .await?;
    client_options.app_name = Some("GAPalletBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout =
        Some(std::time::Duration::from_secs(config.connection_timeout_secs));

    let client = Client::with_options(client_options)?;

    let ping = client
        .database(&config.database)
        .run_command(doc! { "ping": 1 }, None)
        .await;
    match ping {
        Ok(_) => info!("MongoDB connection established"),
        Err(e) => {
            error!("MongoDB ping failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(client)
}
