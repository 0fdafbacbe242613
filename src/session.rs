//! Login flow: cookie-bound client construction and the two-step
//! GET-token / POST-credentials exchange.
//!
//! Each authentication builds a brand-new client around a fresh cookie jar,
//! so no cookie state survives from a previous login or leaks into the next
//! one. The jar lives and dies with the [`Session`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::cookie::Jar;
use reqwest::redirect::Policy;
use thiserror::Error;
use tracing::debug;

use crate::config::ScraperConfig;
use crate::csrf::extract_csrf_token;
use crate::headers::default_header_map;

/// Literal that only appears on the post-login landing page. Marker presence
/// is the sole success check; status codes and redirect targets are not
/// inspected.
const SUCCESS_MARKER: &str = "Acessar Tabela";

const REDIRECT_LIMIT: usize = 10;

/// Errors that can occur during the login flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login page could not be retrieved.
    #[error("failed to load login page: {reason}")]
    LoginPageUnavailable {
        /// Transport error text, or "empty response body".
        reason: String,
    },

    /// The login page did not contain the hidden `_token` field.
    #[error("CSRF token not found on login page")]
    CsrfTokenNotFound,

    /// The credential POST failed at the transport level or returned nothing.
    #[error("failed to authenticate: {reason}")]
    LoginRequestFailed {
        /// Transport error text, or "empty response body".
        reason: String,
    },

    /// The post-login page did not contain the success marker.
    #[error("authentication failed: unable to find success marker")]
    MarkerNotFound,

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// An authenticated portal session.
///
/// Holds the HTTP client whose cookie jar carries the login cookies. Only
/// [`SessionAuthenticator::authenticate`] constructs one, so every `Session`
/// a caller can hold has already passed the success-marker check. The handle
/// is deliberately not `Clone`: one login produces one session, borrowed by
/// the fetcher and dropped by its owner. Dropping the session releases the
/// transport and its cookies.
#[derive(Debug)]
pub struct Session {
    client: Client,
}

impl Session {
    fn new(client: Client) -> Self {
        Self { client }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}

/// Performs the two-step login flow against the portal.
#[derive(Debug, Clone)]
pub struct SessionAuthenticator {
    config: ScraperConfig,
}

impl SessionAuthenticator {
    #[must_use]
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Logs into the portal and returns a live [`Session`].
    ///
    /// The flow is: GET the login page into a fresh cookie jar, extract the
    /// CSRF token, POST `_token`/`email`/`password` form-encoded on the same
    /// jar following redirects, then verify the success marker in the final
    /// body.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when any step fails: loading the login page,
    /// locating the CSRF token, posting the credentials, or verifying the
    /// success marker.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let client = build_session_client(
            self.config.connect_timeout,
            self.config.read_timeout,
        )?;

        let login_page = self.load_login_page(&client).await?;

        let token = extract_csrf_token(&login_page)
            .ok_or(AuthError::CsrfTokenNotFound)?
            .to_string();
        debug!(token_len = token.len(), "extracted CSRF token from login page");

        let login_response = self
            .post_credentials(&client, &token, username, password)
            .await?;

        if !login_response.contains(SUCCESS_MARKER) {
            return Err(AuthError::MarkerNotFound);
        }

        debug!(user = %username, "login succeeded, session cookies captured");
        Ok(Session::new(client))
    }

    async fn load_login_page(&self, client: &Client) -> Result<String, AuthError> {
        let body = client
            .get(&self.config.login_url)
            .send()
            .await
            .map_err(|error| AuthError::LoginPageUnavailable {
                reason: error.to_string(),
            })?
            .text()
            .await
            .map_err(|error| AuthError::LoginPageUnavailable {
                reason: error.to_string(),
            })?;

        if body.is_empty() {
            return Err(AuthError::LoginPageUnavailable {
                reason: "empty response body".to_string(),
            });
        }
        Ok(body)
    }

    async fn post_credentials(
        &self,
        client: &Client,
        token: &str,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let form = [
            ("_token", token),
            ("email", username),
            ("password", password),
        ];

        let body = client
            .post(&self.config.login_url)
            .form(&form)
            .send()
            .await
            .map_err(|error| AuthError::LoginRequestFailed {
                reason: error.to_string(),
            })?
            .text()
            .await
            .map_err(|error| AuthError::LoginRequestFailed {
                reason: error.to_string(),
            })?;

        if body.is_empty() {
            return Err(AuthError::LoginRequestFailed {
                reason: "empty response body".to_string(),
            });
        }
        Ok(body)
    }
}

/// Builds the session-scoped HTTP client: fresh cookie jar, fixed portal
/// headers, bounded timeouts, redirect following for the login POST.
fn build_session_client(
    connect_timeout: Duration,
    read_timeout: Duration,
) -> Result<Client, AuthError> {
    let jar = Arc::new(Jar::default());
    Client::builder()
        .default_headers(default_header_map())
        .cookie_provider(jar)
        .connect_timeout(connect_timeout)
        .timeout(read_timeout)
        .redirect(Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .build()
        .map_err(AuthError::ClientBuild)
}
