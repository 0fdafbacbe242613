//! End-to-end orchestration: validate input, authenticate, fetch, log.
//!
//! The orchestrator owns the session lifecycle. The session exists only
//! inside [`RequestOrchestrator::get_table_data`]'s scope and is dropped on
//! every exit path, success or failure.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::ScraperConfig;
use crate::fetch::{FetchError, TableFetcher};
use crate::request_log::RequestLog;
use crate::session::{AuthError, SessionAuthenticator};
use crate::table::TableData;

/// Top-level error taxonomy for one scrape request.
///
/// Inner errors pass through transparently: the display message a caller
/// sees is exactly the failing step's message, never a rewording.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Username or password was missing from the request.
    #[error("Missing username or password")]
    MissingCredentials,

    /// Any login-flow failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Protected-resource fetch failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// JSON envelope returned at the outward boundary.
///
/// Success serializes as `{"data": [...]}`, any failure as
/// `{"error": "message"}`. Error kinds are never distinguished here; richer
/// typing stays internal to [`ScrapeError`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ScrapeResponse {
    /// Successful scrape: the parsed table rows.
    Data { data: TableData },
    /// Any failure, flattened to its display message.
    Error { error: String },
}

impl From<Result<TableData, ScrapeError>> for ScrapeResponse {
    fn from(result: Result<TableData, ScrapeError>) -> Self {
        match result {
            Ok(data) => Self::Data { data },
            Err(error) => Self::Error {
                error: error.to_string(),
            },
        }
    }
}

/// Ties the authenticator and fetcher together for one scrape request.
pub struct RequestOrchestrator {
    authenticator: SessionAuthenticator,
    fetcher: TableFetcher,
    log: RequestLog,
}

impl RequestOrchestrator {
    #[must_use]
    pub fn new(config: ScraperConfig) -> Self {
        let log = config
            .log_path
            .as_ref()
            .map_or_else(RequestLog::disabled, RequestLog::new);
        Self {
            authenticator: SessionAuthenticator::new(config.clone()),
            fetcher: TableFetcher::new(config),
            log,
        }
    }

    /// Authenticates and fetches the table in one sequential flow.
    ///
    /// Credentials are validated before any network call or log entry, so a
    /// missing username or password produces no portal traffic and no
    /// request-log lines. Every failure past validation is written to the
    /// request log exactly once, at ERROR level, with the failing step's own
    /// message, then surfaced unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::MissingCredentials`] for empty input, or the
    /// transparent [`AuthError`]/[`FetchError`] of the step that failed.
    pub async fn get_table_data(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TableData, ScrapeError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(ScrapeError::MissingCredentials);
        }

        self.log
            .info(&format!("starting table fetch for user: {username}"));

        match self.run(username, password).await {
            Ok(data) => {
                self.log.info(&format!(
                    "table data fetched successfully for user: {username}"
                ));
                info!(user = %username, rows = data.len(), "table fetch complete");
                Ok(data)
            }
            Err(error) => {
                self.log.error(&error.to_string());
                Err(error)
            }
        }
    }

    async fn run(&self, username: &str, password: &str) -> Result<TableData, ScrapeError> {
        let session = self.authenticator.authenticate(username, password).await?;
        self.log
            .info(&format!("authenticated successfully as user: {username}"));
        let data = self.fetcher.fetch_table_data(&session).await?;
        Ok(data)
        // session drops here; its cookie jar dies with it
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_username_rejected_without_network() {
        // Unroutable config: any network attempt would error differently.
        let orchestrator = RequestOrchestrator::new(ScraperConfig::with_base_url(
            "http://127.0.0.1:9",
        ));
        let error = orchestrator.get_table_data("", "secret").await.unwrap_err();
        assert!(matches!(error, ScrapeError::MissingCredentials));
        assert_eq!(error.to_string(), "Missing username or password");
    }

    #[tokio::test]
    async fn test_missing_password_rejected() {
        let orchestrator = RequestOrchestrator::new(ScraperConfig::with_base_url(
            "http://127.0.0.1:9",
        ));
        let error = orchestrator
            .get_table_data("user@example.com", "   ")
            .await
            .unwrap_err();
        assert!(matches!(error, ScrapeError::MissingCredentials));
    }

    #[test]
    fn test_envelope_serializes_data_shape() {
        let response = ScrapeResponse::from(Ok(vec![vec!["A".to_string(), "B".to_string()]]));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"data":[["A","B"]]}"#);
    }

    #[test]
    fn test_envelope_flattens_error_kinds() {
        let auth: ScrapeError = AuthError::CsrfTokenNotFound.into();
        let response = ScrapeResponse::from(Err(auth));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"CSRF token not found on login page"}"#);

        let input = ScrapeResponse::from(Err(ScrapeError::MissingCredentials));
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"error":"Missing username or password"}"#);
    }
}
