use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::cors_conf::CorsConfig;
use crate::config::mongo_conf::MongoConfig;
use crate::middlewares::cors::cors_layer;
use crate::repository::contact_repo::MongoContactRepository;
use crate::repository::mongo;
use crate::repository::quote_repo::MongoQuoteRepository;
use crate::router::api_router;
use crate::service::contact_service::ContactServiceImpl;
use crate::service::quote_service::QuoteServiceImpl;

pub struct App {
    config: AppConfig,
    router: Router,
    client: mongodb::Client,
    pub contact_service: Arc<ContactServiceImpl>,
    pub quote_service: Arc<QuoteServiceImpl>,
}

impl App {
    /// Wire configuration, store client, repositories, services and routes.
    /// Any failure here aborts the process, there is nothing to serve
    /// without the store.
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");
        let cors_config = CorsConfig::from_env();

        let client = mongo::connect(&mongo_config)
            .await
            .expect("MongoDB connection error");
        let db = client.database(&mongo_config.database);

        let contact_repo = Arc::new(MongoContactRepository::new(&db, &mongo_config));
        let quote_repo = Arc::new(MongoQuoteRepository::new(&db, &mongo_config));
        let contact_service = Arc::new(ContactServiceImpl::new(contact_repo));
        let quote_service = Arc::new(QuoteServiceImpl::new(quote_repo));

        let mut app = App {
            config,
            router: Router::new(),
            client,
            contact_service,
            quote_service,
        };
        app.router = app.create_router(&cors_config);
        app
    }

    fn create_router(&self, cors_config: &CorsConfig) -> Router {
        api_router(self.contact_service.clone(), self.quote_service.clone())
            .layer(cors_layer(cors_config).expect("CORS config error"))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn start(self) {
        let addr = self.config.bind_addr().expect("Invalid host");
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .expect("Failed to start server");

        info!("Closing MongoDB client");
        self.client.shutdown().await;
        info!("👋 Server stopped");
    }
}

/// Enables graceful shutdown on:
/// - CTRL+C (SIGINT) - Development
/// - SIGTERM - Kubernetes/Docker
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received CTRL+C, starting graceful shutdown");
        },
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
