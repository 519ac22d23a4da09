//! # Upstream service configuration
//!
//! Base URLs of the two microservices and the optional per-call timeout.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `AUTH_API_URL` | auth service base URL (required) |
//! | `LOGS_API_URL` | logs service base URL (required) |
//! | `UPSTREAM_TIMEOUT_SECS` | per-call timeout in seconds; unset or `0` means none |

use std::time::Duration;

use anyhow::{Context, anyhow};

use crate::config::env::{read_parsed_from, read_string_from};
use crate::upstream::{HttpAuthApi, HttpLogsApi, UpstreamClient};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub auth_url: Option<String>,
    pub logs_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl UpstreamConfig {
    pub fn from_env() -> Self {
        Self::from_provider(|k| std::env::var(k).ok())
    }

    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout = read_parsed_from::<_, u64>(&provider, "UPSTREAM_TIMEOUT_SECS")
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            auth_url: read_string_from(&provider, "AUTH_API_URL"),
            logs_url: read_string_from(&provider, "LOGS_API_URL"),
            timeout,
        }
    }

    /// Returns `true` when both base URLs are present.
    pub fn is_valid(&self) -> bool {
        self.auth_url.is_some() && self.logs_url.is_some()
    }
}

/// Builds the auth service client.
///
/// # Errors
/// Fails when `AUTH_API_URL` is missing or the HTTP client cannot be built.
pub fn create_auth_api(cfg: &UpstreamConfig) -> anyhow::Result<HttpAuthApi> {
    let url = cfg
        .auth_url
        .as_deref()
        .ok_or_else(|| anyhow!("AUTH_API_URL is not set"))?;
    let client = UpstreamClient::new(url, cfg.timeout).context("building auth client")?;
    Ok(HttpAuthApi::new(client))
}

/// Builds the logs service client.
///
/// # Errors
/// Fails when `LOGS_API_URL` is missing or the HTTP client cannot be built.
pub fn create_logs_api(cfg: &UpstreamConfig) -> anyhow::Result<HttpLogsApi> {
    let url = cfg
        .logs_url
        .as_deref()
        .ok_or_else(|| anyhow!("LOGS_API_URL is not set"))?;
    let client = UpstreamClient::new(url, cfg.timeout).context("building logs client")?;
    Ok(HttpLogsApi::new(client))
}
