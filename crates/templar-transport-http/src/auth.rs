//! Bearer token authentication for MCP HTTP requests.

use axum::http::{header, HeaderMap, StatusCode};

/// Validates the `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; the token is compared in
/// constant time.
///
/// # Errors
///
/// Returns `StatusCode::UNAUTHORIZED` if the header is absent, uses
/// another scheme, or carries the wrong token.
pub(crate) fn validate_bearer(headers: &HeaderMap, expected: &str) -> Result<(), StatusCode> {
    let provided = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token);

    match provided {
        Some(token) if constant_time_eq(token.as_bytes(), expected.as_bytes()) => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
