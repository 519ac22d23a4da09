//! Runtime configuration, read from the environment.

pub mod app;
pub mod env;
pub mod upstream;
pub mod web;

pub use app::AppConfig;
pub use upstream::{UpstreamConfig, create_auth_api, create_logs_api};
pub use web::{CorsConfig, HttpConfig};
