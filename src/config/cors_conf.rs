use std::env;

/// CORS configuration sourced from the environment.
///
/// `CORS_ORIGINS` is a comma separated list of allowed origins. The literal
/// `*` (also the default when the variable is unset) allows any origin.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        CorsConfig {
            origins: parse_origins(&raw),
        }
    }

    /// True when every origin should be allowed.
    pub fn allow_any_origin(&self) -> bool {
        self.origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        CorsConfig {
            origins: vec!["*".to_string()],
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_any() {
        let config = CorsConfig::default();
        assert!(config.allow_any_origin());
    }

    #[test]
    fn test_parse_origin_list() {
        let origins = parse_origins("https://ga-pallet.com, https://www.ga-pallet.com");
        assert_eq!(
            origins,
            vec![
                "https://ga-pallet.com".to_string(),
                "https://www.ga-pallet.com".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_empty_falls_back_to_wildcard() {
        assert_eq!(parse_origins(""), vec!["*".to_string()]);
        assert_eq!(parse_origins(" , "), vec!["*".to_string()]);
    }

    #[test]
    fn test_wildcard_among_origins_allows_any() {
        let config = CorsConfig {
            origins: parse_origins("https://ga-pallet.com,*"),
        };
        assert!(config.allow_any_origin());
    }
}
