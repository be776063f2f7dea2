//! API configuration.

use std::fmt;

/// Environment variable holding the shared secret.
pub const API_SECRET_KEY_VAR: &str = "API_SECRET_KEY";

/// Where the shared secret comes from.
///
/// The secret is looked up on every request, so rotating the
/// environment value takes effect without a restart.
#[derive(Clone)]
pub enum ApiKeySource {
    /// Read the named environment variable on each lookup.
    Env(String),
    /// Fixed value, `None` meaning not configured.
    Fixed(Option<String>),
}

impl ApiKeySource {
    /// Current secret. Empty values count as not configured.
    pub fn current(&self) -> Option<String> {
        let key = match self {
            ApiKeySource::Env(var) => std::env::var(var).ok(),
            ApiKeySource::Fixed(key) => key.clone(),
        };
        key.filter(|k| !k.is_empty())
    }
}

impl Default for ApiKeySource {
    fn default() -> Self {
        ApiKeySource::Env(API_SECRET_KEY_VAR.to_string())
    }
}

// Never print the secret itself.
impl fmt::Debug for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeySource::Env(var) => f.debug_tuple("Env").field(var).finish(),
            ApiKeySource::Fixed(key) => f
                .debug_tuple("Fixed")
                .field(&key.as_ref().map(|_| "<redacted>"))
                .finish(),
        }
    }
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// Expose Prometheus metrics at /metrics
    pub metrics_enabled: bool,
    /// Shared secret for X-API-KEY authentication
    pub api_key: ApiKeySource,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8002,
            cors_origins: vec!["*".to_string()],
            max_body_size: 10 * 1024 * 1024, // 10MB
            metrics_enabled: true,
            api_key: ApiKeySource::default(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            metrics_enabled: std::env::var("METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.metrics_enabled),
            api_key: defaults.api_key,
        }
    }

    /// Config with a fixed shared secret.
    pub fn with_api_key(mut self, key: Option<&str>) -> Self {
        self.api_key = ApiKeySource::Fixed(key.map(str::to_string));
        self
    }

    /// Address to bind, as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8002");
        assert!(config.metrics_enabled);
        assert!(matches!(config.api_key, ApiKeySource::Env(ref v) if v == "API_SECRET_KEY"));
    }

    #[test]
    fn test_fixed_key() {
        assert_eq!(
            ApiKeySource::Fixed(Some("s3cr3t".into())).current().as_deref(),
            Some("s3cr3t")
        );
        assert_eq!(ApiKeySource::Fixed(None).current(), None);
    }

    #[test]
    fn test_empty_key_is_unset() {
        assert_eq!(ApiKeySource::Fixed(Some(String::new())).current(), None);
    }

    #[test]
    fn test_env_key_is_read_per_call() {
        let var = "NCA_API_TEST_SECRET_PER_CALL";
        let source = ApiKeySource::Env(var.to_string());

        std::env::remove_var(var);
        assert_eq!(source.current(), None);

        std::env::set_var(var, "first");
        assert_eq!(source.current().as_deref(), Some("first"));

        std::env::set_var(var, "second");
        assert_eq!(source.current().as_deref(), Some("second"));

        std::env::remove_var(var);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", ApiKeySource::Fixed(Some("s3cr3t".into())));
        assert!(!debug.contains("s3cr3t"));
    }
}
