//! Clients for the two upstream REST microservices.

pub mod auth_api;
pub mod client;
pub mod error;
pub mod logs_api;
pub mod payload;
pub mod wire;

#[cfg(test)]
pub(crate) mod testing;

pub use auth_api::{AuthApi, HttpAuthApi};
pub use client::UpstreamClient;
pub use error::{UpstreamError, UpstreamResult};
pub use logs_api::{HttpLogsApi, LogsApi};
