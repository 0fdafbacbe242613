//! Authenticated fetch of the protected table page.

use thiserror::Error;
use tracing::debug;

use crate::config::ScraperConfig;
use crate::session::Session;
use crate::table::{TableData, parse_table_data};

/// Errors that can occur while fetching the protected table page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The table page could not be retrieved.
    #[error("failed to fetch table data: {reason}")]
    TableUnavailable {
        /// Transport error text, or "empty response body".
        reason: String,
    },
}

/// Fetches the protected table page on an authenticated [`Session`] and
/// delegates parsing to [`parse_table_data`].
#[derive(Debug, Clone)]
pub struct TableFetcher {
    config: ScraperConfig,
}

impl TableFetcher {
    #[must_use]
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Issues one GET to the table URL, reusing the session's cookie jar.
    ///
    /// A fresh request builder makes the method explicitly GET; only the
    /// cookies are carried over from the login exchange.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure or an empty body. Parsing
    /// itself cannot fail: a page without rows yields an empty table.
    pub async fn fetch_table_data(&self, session: &Session) -> Result<TableData, FetchError> {
        let body = session
            .client()
            .get(&self.config.table_url)
            .send()
            .await
            .map_err(|error| FetchError::TableUnavailable {
                reason: error.to_string(),
            })?
            .text()
            .await
            .map_err(|error| FetchError::TableUnavailable {
                reason: error.to_string(),
            })?;

        if body.is_empty() {
            return Err(FetchError::TableUnavailable {
                reason: "empty response body".to_string(),
            });
        }

        let data = parse_table_data(&body);
        debug!(rows = data.len(), "parsed table page");
        Ok(data)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_is_stable() {
        let error = FetchError::TableUnavailable {
            reason: "empty response body".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to fetch table data: empty response body"
        );
    }
}
