//! Process-wide scraper configuration.
//!
//! Endpoint URLs and the request-log path are injected at construction time
//! rather than baked in as compile-time constants, so tests can point the
//! scraper at a mock server and deployments can relocate the log file.

use std::path::PathBuf;
use std::time::Duration;

/// Production login endpoint.
pub const DEFAULT_LOGIN_URL: &str = "https://sistema.7vitrines.com/login";

/// Production table endpoint (requires an authenticated session).
pub const DEFAULT_TABLE_URL: &str = "https://sistema.7vitrines.com/teste/table";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// Configuration shared by the authenticator, fetcher, and orchestrator.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Login page URL; also receives the credential POST.
    pub login_url: String,
    /// Protected table page URL.
    pub table_url: String,
    /// Append-only request log destination; `None` disables file logging.
    pub log_path: Option<PathBuf>,
    /// TCP connect timeout for every portal request.
    pub connect_timeout: Duration,
    /// Total per-request timeout for every portal request.
    pub read_timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            table_url: DEFAULT_TABLE_URL.to_string(),
            log_path: None,
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(READ_TIMEOUT_SECS),
        }
    }
}

impl ScraperConfig {
    /// Derives both endpoint URLs from a single base URL, keeping the
    /// production path layout. Used by tests against a mock server.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            login_url: format!("{base}/login"),
            table_url: format!("{base}/teste/table"),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_production_endpoints() {
        let config = ScraperConfig::default();
        assert_eq!(config.login_url, DEFAULT_LOGIN_URL);
        assert_eq!(config.table_url, DEFAULT_TABLE_URL);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_with_base_url_preserves_path_layout() {
        let config = ScraperConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.login_url, "http://127.0.0.1:8080/login");
        assert_eq!(config.table_url, "http://127.0.0.1:8080/teste/table");
    }
}
