use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::info;

use crate::config::{ConfigError, CorsConfig};

/// Build the CORS layer from configuration.
///
/// Credentials are always allowed, which rules out sending a literal
/// wildcard. The any-origin case mirrors the request origin instead,
/// matching how browsers expect `*` to behave once credentials are in play.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let allow_origin = if config.allow_any_origin() {
        info!("CORS: allowing any origin");
        AllowOrigin::mirror_request()
    } else {
        info!("CORS: allowing origins {:?}", config.origins);
        let origins = config
            .origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    ConfigError::InvalidValue(format!("Invalid CORS origin: {}", origin))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
