use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

/// Header carrying the shared secret for manual cache revalidation.
pub const REVALIDATE_SECRET_HEADER: &str = "x-revalidate-secret";

/// Constant-time string comparison to prevent timing attacks
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Whether the request may trigger a revalidation.
///
/// With no secret configured the endpoint is closed.
pub fn is_revalidation_authorized(expected: Option<&str>, headers: &HeaderMap) -> bool {
    let Some(expected) = expected else {
        return false;
    };
    headers
        .get(REVALIDATE_SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|provided| constant_time_compare(provided, expected))
        .unwrap_or(false)
}
