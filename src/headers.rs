//! Fixed browser-like header set shared by every portal request.
//!
//! Single source for the header values so login and table traffic present
//! the same client fingerprint to the portal.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
const DEFAULT_ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

/// Ordered `(name, value)` pairs attached to every portal request.
#[must_use]
pub fn default_headers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("User-Agent", DEFAULT_USER_AGENT),
        ("Accept", DEFAULT_ACCEPT),
        ("Accept-Language", DEFAULT_ACCEPT_LANGUAGE),
    ]
}

/// Builds the default-header map installed on the portal HTTP client.
#[must_use]
pub fn default_header_map() -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    map.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
    map.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
    );
    map
}
