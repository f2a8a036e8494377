use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gapallet_backend::app::app::App;

#[tokio::main]
async fn main() {
    // Load .env first so RUST_LOG from the file reaches the subscriber
    let dotenv_result = dotenv();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gapallet_backend=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .init();

    info!("🚀 Starting G&A Pallet API");
    match dotenv_result {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let app = App::new().await;
    app.start().await;
}
