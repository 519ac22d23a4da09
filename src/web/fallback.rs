use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Fallback for every path other than the GraphQL endpoint.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found", "endpoint": "/graphql" })),
    )
}
