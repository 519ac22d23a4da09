use axum::http::HeaderMap;

/// Reads the raw token from `header_name`.
///
/// The value is forwarded to the auth service as-is (trimmed); no `Bearer `
/// prefix is stripped. A missing or non-UTF-8 header yields `""`, which
/// resolves to the anonymous identity.
pub fn extract_token<'a>(headers: &'a HeaderMap, header_name: &str) -> &'a str {
    headers
        .get(header_name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .unwrap_or_default()
}
