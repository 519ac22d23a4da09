//! # audit_gateway
//!
//! GraphQL gateway in front of two REST microservices: an auth service
//! (users, tokens) and a logs service (audit reasons and log entries).
//!
//! A request flows through:
//! - [`graphql::handler`]: reads the bearer token and resolves it to an
//!   [`auth::Identity`] via the auth service
//! - [`graphql::resolvers`]: one resolver per operation
//! - [`dispatch`]: per-operation authorization, payload allow-listing and the
//!   upstream call(s)
//! - [`upstream`]: reqwest clients for both services
//!
//! Failures reach clients as GraphQL errors carrying a numeric `code`
//! extension (see [`error::GatewayError`]).

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use async_graphql;
pub use axum;
pub use serde_json;
pub use tokio;

// ===============================
// Public modules
// ===============================
pub mod auth;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod graphql;
pub mod upstream;
pub mod web;
