//! Service configuration.

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:3001").
    pub listen_addr: String,

    /// Path to the `RocksDB` data directory (default: "/data/stock-sync").
    pub data_dir: String,

    /// Shared-secret API key required on all `/api` routes.
    ///
    /// When unset every authenticated request is rejected; there is no
    /// open-access fallback.
    pub api_key: Option<String>,

    /// Base URL of the external POS service (default: `http://localhost:3000`).
    pub pos_server_url: String,

    /// Shared-secret API key forwarded to the POS service.
    pub pos_api_key: Option<String>,

    /// Environment name used in startup logging (default: "development").
    pub environment: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".into()),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "/data/stock-sync".into()),
            api_key: std::env::var("API_KEY").ok(),
            pos_server_url: std::env::var("POS_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            pos_api_key: std::env::var("POS_API_KEY").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3001".into(),
            data_dir: "/data/stock-sync".into(),
            api_key: None,
            pos_server_url: "http://localhost:3000".into(),
            pos_api_key: None,
            environment: "development".into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        }
    }
}
