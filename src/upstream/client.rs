//! # Upstream HTTP client
//!
//! Thin JSON client bound to one microservice base URL.
//!
//! Every call returns the parsed response body as [`serde_json::Value`];
//! reshaping into GraphQL types happens in the dispatch layer. A non-2xx
//! status is reported as [`UpstreamError::Status`] together with the body the
//! service sent back.
//!
//! No retries are performed. Unless a timeout is configured, a hung upstream
//! call hangs the caller.

use std::borrow::Cow;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::{UpstreamError, UpstreamResult};

#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Creates a client for the given base URL.
    ///
    /// A trailing `/` is appended when missing so that relative paths such as
    /// `"user/"` always land under the base.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> UpstreamResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get(&self, path: &str) -> UpstreamResult<Value> {
        self.send(self.http.get(self.url(path))).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> UpstreamResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> UpstreamResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> UpstreamResult<Value> {
        self.send(self.http.delete(self.url(path))).await
    }

    async fn send(&self, request: RequestBuilder) -> UpstreamResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "upstream response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Percent-encodes a caller-supplied value so it fills exactly one path
/// segment. A `/` or `?` inside an id cannot reach another route.
pub fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        http::StatusCode,
        routing::{delete, get, post},
    };
    use serde_json::json;

    use crate::upstream::testing::serve;

    #[test]
    fn appends_trailing_slash_to_base_url() {
        let client = UpstreamClient::new("http://auth.local/api", None).unwrap();

        assert_eq!(client.base_url(), "http://auth.local/api/");
        assert_eq!(client.url("user/"), "http://auth.local/api/user/");
    }

    #[test]
    fn keeps_existing_trailing_slash() {
        let client = UpstreamClient::new("http://logs.local/", None).unwrap();

        assert_eq!(client.url("/api/ms/logs/"), "http://logs.local/api/ms/logs/");
    }

    #[test]
    fn segment_escapes_separators() {
        assert_eq!(segment("R1"), "R1");
        assert_eq!(segment("../logs/X"), "..%2Flogs%2FX");
        assert_eq!(segment("2024/05/01"), "2024%2F05%2F01");
        assert_eq!(segment("a?b#c"), "a%3Fb%23c");
    }

    #[tokio::test]
    async fn get_returns_parsed_json() {
        let app = Router::new().route("/ping", get(|| async { Json(json!({ "ok": true })) }));
        let base = serve(app).await;

        let client = UpstreamClient::new(&base, None).unwrap();
        let value = client.get("ping").await.unwrap();

        assert_eq!(value, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let app = Router::new().route(
            "/echo",
            post(|Json(body): Json<Value>| async move { Json(body) }),
        );
        let base = serve(app).await;

        let client = UpstreamClient::new(&base, None).unwrap();
        let value = client.post("echo", &json!({ "token": "abc" })).await.unwrap();

        assert_eq!(value, json!({ "token": "abc" }));
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_body() {
        let app = Router::new().route(
            "/denied",
            get(|| async { (StatusCode::UNAUTHORIZED, "token expired") }),
        );
        let base = serve(app).await;

        let client = UpstreamClient::new(&base, None).unwrap();
        let err = client.get("denied").await.unwrap_err();

        match err {
            UpstreamError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "token expired");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let app = Router::new().route("/broken", get(|| async { "not json" }));
        let base = serve(app).await;

        let client = UpstreamClient::new(&base, None).unwrap();
        let err = client.get("broken").await.unwrap_err();

        assert!(matches!(err, UpstreamError::Decode(_)));
    }

    #[tokio::test]
    async fn empty_body_yields_null() {
        let app = Router::new().route("/gone", delete(|| async { StatusCode::NO_CONTENT }));
        let base = serve(app).await;

        let client = UpstreamClient::new(&base, None).unwrap();
        let value = client.delete("gone").await.unwrap();

        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = UpstreamClient::new(&format!("http://{addr}/"), None).unwrap();
        let err = client.get("anything").await.unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)));
    }
}
