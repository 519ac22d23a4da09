//! # CORS
//!
//! Browser clients send the bearer token in a request header, so the
//! configured token header is always allowed alongside `Content-Type`.
//! Without configured origins, `http://localhost:3000` is allowed.

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::web::CorsConfig;

const DEV_ORIGIN: &str = "http://localhost:3000";

/// Splits a comma-separated origin list. Empty and invalid entries are skipped.
fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect()
}

/// Builds the CORS layer for the GraphQL endpoint.
///
/// An unparsable `token_header` falls back to `Authorization`.
pub fn build_cors(cors: &CorsConfig, token_header: &str) -> CorsLayer {
    let origins = parse_origins(&cors.env);
    let origin_cfg = if origins.is_empty() {
        AllowOrigin::list([HeaderValue::from_static(DEV_ORIGIN)])
    } else {
        AllowOrigin::list(origins)
    };

    let token_header =
        HeaderName::from_bytes(token_header.as_bytes()).unwrap_or(header::AUTHORIZATION);

    let mut layer = CorsLayer::new()
        .allow_origin(origin_cfg)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, token_header]);

    if cors.credentials {
        layer = layer.allow_credentials(true);
    }

    layer
}
