//! Tabela Core Library
//!
//! This library logs into the 7vitrines portal using form-based
//! authentication with CSRF-token extraction, then scrapes the protected
//! data table and returns it as structured rows.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`config`] - Endpoint URLs, timeouts, and log-file configuration
//! - [`headers`] - Fixed browser-like header set for all portal requests
//! - [`csrf`] - CSRF token extraction from the login page
//! - [`session`] - Two-step login flow producing an authenticated [`Session`]
//! - [`fetch`] - Authenticated fetch of the protected table page
//! - [`table`] - HTML table extraction into rows of trimmed cell text
//! - [`orchestrator`] - End-to-end flow: validate, authenticate, fetch, log
//! - [`request_log`] - Append-only timestamped operation log

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod csrf;
pub mod fetch;
pub mod headers;
pub mod orchestrator;
pub mod request_log;
pub mod session;
pub mod table;

// Re-export commonly used types
pub use config::ScraperConfig;
pub use csrf::extract_csrf_token;
pub use fetch::{FetchError, TableFetcher};
pub use orchestrator::{RequestOrchestrator, ScrapeError, ScrapeResponse};
pub use request_log::{LogLevel, RequestLog};
pub use session::{AuthError, Session, SessionAuthenticator};
pub use table::{TableData, TableRow, parse_table_data};
