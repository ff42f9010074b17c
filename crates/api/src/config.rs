use reqwest::Url;

/// Deployment environment name that turns on the strict checks.
const PRODUCTION: &str = "production";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development, except
/// the backend URL, which has no default: forwarding routes answer 500 until
/// it is set.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Overall inbound request deadline in seconds (default: `35`). Kept above
    /// `backend_timeout_secs` so backend stalls surface from the forwarder.
    pub request_timeout_secs: u64,
    /// Base URL of the backend API, without trailing slash.
    pub backend_url: Option<String>,
    /// Outbound backend request timeout in seconds (default: `30`).
    pub backend_timeout_secs: u64,
    /// Cookie read during token extraction and set on login (default: `authToken`).
    pub session_cookie_name: String,
    /// Max-Age of the login cookie in seconds (default: `600`).
    pub session_cookie_max_age_secs: u64,
    /// Add `Secure` to the session cookie (default: `false`).
    pub cookie_secure: bool,
    /// Deployment environment (default: `development`).
    pub app_env: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                 |
    /// |-------------------------------|-------------------------|
    /// | `HOST`                        | `0.0.0.0`               |
    /// | `PORT`                        | `3000`                  |
    /// | `CORS_ORIGINS`                | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS`        | `35`                    |
    /// | `BACKEND_API_URL`             | unset                   |
    /// | `BACKEND_TIMEOUT_SECS`        | `30`                    |
    /// | `SESSION_COOKIE_NAME`         | `authToken`             |
    /// | `SESSION_COOKIE_MAX_AGE_SECS` | `600`                   |
    /// | `COOKIE_SECURE`               | `false`                 |
    /// | `APP_ENV`                     | `development`           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "35".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let backend_url = std::env::var("BACKEND_API_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let backend_timeout_secs: u64 = std::env::var("BACKEND_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("BACKEND_TIMEOUT_SECS must be a valid u64");

        let session_cookie_name =
            std::env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "authToken".into());

        let session_cookie_max_age_secs: u64 = std::env::var("SESSION_COOKIE_MAX_AGE_SECS")
            .unwrap_or_else(|_| "600".into())
            .parse()
            .expect("SESSION_COOKIE_MAX_AGE_SECS must be a valid u64");

        let cookie_secure: bool = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("COOKIE_SECURE must be true or false");

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            backend_url,
            backend_timeout_secs,
            session_cookie_name,
            session_cookie_max_age_secs,
            cookie_secure,
            app_env,
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case(PRODUCTION)
    }

    /// Check the backend URL against the deployment environment.
    ///
    /// Production requires a configured HTTPS URL that does not point at
    /// localhost. Development only warns about plain HTTP to a remote host.
    /// An inbound deadline that does not outlast the backend timeout is a
    /// warning in every environment.
    pub fn validate(&self) -> EnvironmentReport {
        let mut report = EnvironmentReport::default();

        if self.request_timeout_secs <= self.backend_timeout_secs {
            report.warnings.push(format!(
                "REQUEST_TIMEOUT_SECS ({}) should exceed BACKEND_TIMEOUT_SECS ({})",
                self.request_timeout_secs, self.backend_timeout_secs
            ));
        }

        let Some(raw) = self.backend_url.as_deref() else {
            if self.is_production() {
                report
                    .errors
                    .push("BACKEND_API_URL must be set in production".into());
            } else {
                report.warnings.push(
                    "BACKEND_API_URL is not set; forwarding routes will answer 500".into(),
                );
            }
            return report;
        };

        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(e) => {
                report
                    .errors
                    .push(format!("BACKEND_API_URL is not a valid URL ({raw}): {e}"));
                return report;
            }
        };

        let https = url.scheme() == "https";
        let local = is_local_host(&url);

        if self.is_production() {
            if !https {
                report
                    .errors
                    .push(format!("Production backend URL must use HTTPS, not HTTP: {raw}"));
            }
            if local {
                report
                    .errors
                    .push(format!("Production cannot use a localhost backend URL: {raw}"));
            }
        } else if !https && !local {
            report
                .warnings
                .push("Using HTTP with a non-localhost backend URL. Consider using HTTPS.".into());
        }

        report
    }
}

fn is_local_host(url: &Url) -> bool {
    matches!(
        url.host_str(),
        Some("localhost") | Some("127.0.0.1") | Some("[::1]") | Some("::1")
    )
}

/// Outcome of [`ServerConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentReport {
    /// Problems that must stop the server from starting.
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl EnvironmentReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
