//! # HTTP and CORS configuration

/// Listener and request limits.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpConfig {
    pub port: u16,
    pub max_body_bytes: usize,
}

impl HttpConfig {
    pub const DEFAULT_PORT: u16 = 4000;
    pub const DEFAULT_MAX_BODY_MB: u32 = 5;
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            max_body_bytes: Self::DEFAULT_MAX_BODY_MB as usize * 1024 * 1024,
        }
    }
}

/// CORS policy.
///
/// `env` is the raw comma-separated `CORS_ORIGINS` value; parsing happens in
/// [`build_cors`](crate::web::cors::build_cors).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CorsConfig {
    pub env: String,
    pub credentials: bool,
}
