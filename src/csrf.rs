//! CSRF token extraction from the login page.
//!
//! The portal embeds its token as a hidden `_token` input. The page
//! structure is stable, so a single-pass pattern match is used instead of a
//! full DOM parse.

use std::sync::LazyLock;

use regex::Regex;

static CSRF_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_static_regex(r#"<input type="hidden" name="_token" value="([^"]+)""#)
});

/// Compiles a known-good pattern; panics at startup for typos in static patterns.
fn compile_static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid static regex '{pattern}': {e}"))
}

/// Extracts the hidden `_token` value from login-page HTML.
///
/// Returns the first occurrence in document order, or `None` when the field
/// is absent. Absence is a fatal authentication precondition for callers.
#[must_use]
pub fn extract_csrf_token(html: &str) -> Option<&str> {
    CSRF_TOKEN_RE
        .captures(html)
        .and_then(|caps| caps.get(1).map(|m| m.as_str()))
}
