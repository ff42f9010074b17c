use dormspace_core::envelope::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Default session lifetime in minutes.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 10;

/// TTLs below this many minutes draw a warning.
const SHORT_TTL_MINUTES: i64 = 5;
/// TTLs above this many minutes draw a warning.
const LONG_TTL_MINUTES: i64 = 60;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin serving the gateway routes (default: `http://localhost:3000`).
    pub base_url: String,
    /// Lifetime given to a freshly issued token, in minutes (default: `10`).
    pub token_ttl_minutes: i64,
    /// Page size for list calls that do not specify one (default: `10`).
    pub default_page_size: u32,
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with default TTL and page size.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `API_BASE_URL`             | `http://localhost:3000` |
    /// | `TOKEN_EXPIRATION_MINUTES` | `10`                    |
    /// | `DEFAULT_PAGE_SIZE`        | `10`                    |
    ///
    /// # Panics
    ///
    /// Panics if the TTL is not a positive integer or the page size is
    /// outside `1..=100`.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let token_ttl_minutes: i64 = std::env::var("TOKEN_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_MINUTES.to_string())
            .parse()
            .expect("TOKEN_EXPIRATION_MINUTES must be a valid i64");
        assert!(
            token_ttl_minutes > 0,
            "TOKEN_EXPIRATION_MINUTES must be a positive number"
        );

        let default_page_size: u32 = std::env::var("DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .expect("DEFAULT_PAGE_SIZE must be a valid u32");
        assert!(
            (1..=MAX_PAGE_SIZE).contains(&default_page_size),
            "DEFAULT_PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE}"
        );

        let config = Self {
            base_url,
            token_ttl_minutes,
            default_page_size,
        };
        for warning in config.warnings() {
            tracing::warn!(%warning, "Client configuration");
        }
        config
    }

    /// Non-fatal configuration concerns.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.token_ttl_minutes < SHORT_TTL_MINUTES {
            warnings.push("TOKEN_EXPIRATION_MINUTES is very short (< 5 minutes)".to_string());
        }
        if self.token_ttl_minutes > LONG_TTL_MINUTES {
            warnings.push(
                "TOKEN_EXPIRATION_MINUTES is very long (> 60 minutes) - consider security implications"
                    .to_string(),
            );
        }
        warnings
    }
}
