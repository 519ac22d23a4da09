//! # Application configuration loader
//!
//! Automatically loads `.env` files outside production. It checks for a
//! custom `DOTENV_FILE` path first, then falls back to `.env.{APP_ENV}` or
//! `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `AUTH_API_URL` / `LOGS_API_URL` | Upstream base URLs | *required* |
//! | `UPSTREAM_TIMEOUT_SECS` | Per-call upstream timeout | *none* |
//! | `PORT` | Listening port | `4000` |
//! | `HTTP_MAX_BODY_BYTES` | Maximum request body size (bytes) | derived from `HTTP_MAX_BODY_MB` |
//! | `HTTP_MAX_BODY_MB` | Max body size in megabytes (if bytes not set) | `5` |
//! | `GRAPHIQL` | Serve GraphiQL on `GET /graphql` | `false` |
//! | `CORS_ORIGINS` | Allowed origins for CORS | `""` |
//! | `CORS_CREDENTIALS` | Allow credentials in CORS requests | `false` |
//! | `AUTH_HEADER` | Header carrying the bearer token | `authorization` |

use std::env;

use crate::config::{
    env::{read_flag, read_parsed, read_string, read_u32},
    upstream::UpstreamConfig,
    web::{CorsConfig, HttpConfig},
};
use crate::graphql::GraphqlAuthConfig;

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub upstream: UpstreamConfig,
    pub http: HttpConfig,
    pub cors: CorsConfig,
    pub auth: GraphqlAuthConfig,
    /// Whether the GraphiQL IDE is served (development use).
    pub enable_graphiql: bool,
}

impl AppConfig {
    /// Loads configuration from the environment, after the dotenv files.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let max_body_bytes = read_parsed::<usize>("HTTP_MAX_BODY_BYTES").unwrap_or_else(|| {
            read_u32("HTTP_MAX_BODY_MB", HttpConfig::DEFAULT_MAX_BODY_MB) as usize * 1024 * 1024
        });

        AppConfig {
            upstream: UpstreamConfig::from_env(),
            http: HttpConfig {
                port: read_parsed("PORT").unwrap_or(HttpConfig::DEFAULT_PORT),
                max_body_bytes,
            },
            cors: CorsConfig {
                env: env::var("CORS_ORIGINS").unwrap_or_default(),
                credentials: read_flag("CORS_CREDENTIALS", false),
            },
            auth: read_string("AUTH_HEADER")
                .map(GraphqlAuthConfig::new)
                .unwrap_or_default(),
            enable_graphiql: read_flag("GRAPHIQL", false),
        }
    }
}
